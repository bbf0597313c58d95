//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod attendance;
mod events;
mod exams;
mod fees;
mod library;
mod notices;
mod notifications;
mod students;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// 数据库操作错误的统一包装，context 描述失败的操作
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sea_orm::DbErr) -> SchoolSystemError {
    move |e| SchoolSystemError::database_operation(format!("{context}: {e}"))
}

/// 插入场景的错误包装：唯一约束冲突映射为 Conflict，其余同 db_error。
/// 各数据库后端的冲突报错文案不同，这里统一走 SqlErr 判别。
pub(crate) fn insert_error(
    context: &'static str,
) -> impl FnOnce(sea_orm::DbErr) -> SchoolSystemError {
    move |e| match e.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
            SchoolSystemError::conflict(format!("{context}: {detail}"))
        }
        _ => SchoolSystemError::database_operation(format!("{context}: {e}")),
    }
}

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

#[cfg(test)]
mod tests;

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentSubmission},
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceFilter, RosterEntry},
    },
    events::{
        entities::SchoolEvent,
        requests::{CreateEventRequest, EventListQuery, UpdateEventRequest},
        responses::EventListResponse,
    },
    exams::{
        entities::{Exam, ExamResult, StudentPerformance},
        requests::{CreateExamRequest, ExamListQuery, UpdateExamRequest},
        responses::ExamListResponse,
    },
    fees::{
        entities::FeePayment,
        requests::{CreateFeePaymentRequest, FeeListQuery, UpdateFeePaymentRequest},
        responses::{FeeListResponse, FeeStatisticsResponse},
    },
    library::{
        entities::{BookLoan, LibraryBook},
        requests::{BookListQuery, CreateBookRequest, UpdateBookRequest},
        responses::BookListResponse,
    },
    notices::{
        entities::Notice, requests::NoticeListQuery, responses::NoticeListResponse,
    },
    notifications::{
        entities::{Notification, NotificationKind},
        requests::NotificationListQuery,
        responses::NotificationListResponse,
    },
    students::{
        entities::{ProfileStatus, StudentDetail},
        requests::{NewStudentProfile, StudentListQuery, UpdateStudentRequest},
        responses::{StudentListResponse, StudentStatisticsResponse},
    },
    teachers::{
        entities::TeacherDetail,
        requests::{NewTeacherProfile, TeacherListQuery, UpdateTeacherRequest},
        responses::{TeacherListResponse, TeacherStatisticsResponse},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 学生模块
    async fn create_student_with_account(
        &self,
        account: CreateUserRequest,
        profile: NewStudentProfile,
    ) -> Result<StudentDetail> {
        self.create_student_with_account_impl(account, profile).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student_profile(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>> {
        self.update_student_profile_impl(id, update).await
    }

    async fn set_student_status(&self, id: i64, status: ProfileStatus) -> Result<bool> {
        self.set_student_status_impl(id, status).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn student_statistics(&self) -> Result<StudentStatisticsResponse> {
        self.student_statistics_impl().await
    }

    async fn list_students_by_class(&self, class_name: &str) -> Result<Vec<StudentDetail>> {
        self.list_students_by_class_impl(class_name).await
    }

    // 教师模块
    async fn create_teacher_with_account(
        &self,
        account: CreateUserRequest,
        profile: NewTeacherProfile,
    ) -> Result<TeacherDetail> {
        self.create_teacher_with_account_impl(account, profile).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<TeacherDetail>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher_profile(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<TeacherDetail>> {
        self.update_teacher_profile_impl(id, update).await
    }

    async fn set_teacher_status(&self, id: i64, status: ProfileStatus) -> Result<bool> {
        self.set_teacher_status_impl(id, status).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn teacher_statistics(&self) -> Result<TeacherStatisticsResponse> {
        self.teacher_statistics_impl().await
    }

    async fn list_active_teacher_user_ids(&self) -> Result<Vec<i64>> {
        self.list_active_teacher_user_ids_impl().await
    }

    // 考勤模块
    async fn replace_attendance(
        &self,
        class_name: &str,
        date: NaiveDate,
        entries: &[RosterEntry],
    ) -> Result<usize> {
        self.replace_attendance_impl(class_name, date, entries).await
    }

    async fn list_attendance(&self, filter: AttendanceFilter) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(filter).await
    }

    // 费用模块
    async fn create_fee_payment(&self, req: CreateFeePaymentRequest) -> Result<FeePayment> {
        self.create_fee_payment_impl(req).await
    }

    async fn get_fee_payment_by_id(&self, id: i64) -> Result<Option<FeePayment>> {
        self.get_fee_payment_by_id_impl(id).await
    }

    async fn list_fee_payments(&self, query: FeeListQuery) -> Result<FeeListResponse> {
        self.list_fee_payments_impl(query).await
    }

    async fn update_fee_payment(
        &self,
        id: i64,
        update: UpdateFeePaymentRequest,
    ) -> Result<Option<FeePayment>> {
        self.update_fee_payment_impl(id, update).await
    }

    async fn delete_fee_payment(&self, id: i64) -> Result<bool> {
        self.delete_fee_payment_impl(id).await
    }

    async fn list_overdue_fee_payments(&self, as_of: NaiveDate) -> Result<Vec<FeePayment>> {
        self.list_overdue_fee_payments_impl(as_of).await
    }

    async fn mark_fee_payments_overdue(&self, as_of: NaiveDate) -> Result<u64> {
        self.mark_fee_payments_overdue_impl(as_of).await
    }

    async fn fee_statistics(&self) -> Result<FeeStatisticsResponse> {
        self.fee_statistics_impl().await
    }

    // 图书馆模块
    async fn create_book(&self, req: CreateBookRequest) -> Result<LibraryBook> {
        self.create_book_impl(req).await
    }

    async fn get_book_by_id(&self, id: i64) -> Result<Option<LibraryBook>> {
        self.get_book_by_id_impl(id).await
    }

    async fn list_books(&self, query: BookListQuery) -> Result<BookListResponse> {
        self.list_books_impl(query).await
    }

    async fn update_book(&self, id: i64, update: UpdateBookRequest) -> Result<Option<LibraryBook>> {
        self.update_book_impl(id, update).await
    }

    async fn delete_book(&self, id: i64) -> Result<bool> {
        self.delete_book_impl(id).await
    }

    async fn create_loan(
        &self,
        book_id: i64,
        borrower_id: i64,
        borrow_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<BookLoan> {
        self.create_loan_impl(book_id, borrower_id, borrow_date, due_date)
            .await
    }

    async fn get_loan_by_id(&self, id: i64) -> Result<Option<BookLoan>> {
        self.get_loan_by_id_impl(id).await
    }

    async fn list_loans_by_borrower(&self, borrower_id: i64) -> Result<Vec<BookLoan>> {
        self.list_loans_by_borrower_impl(borrower_id).await
    }

    async fn complete_loan(
        &self,
        id: i64,
        return_date: NaiveDate,
        fine_amount: i64,
    ) -> Result<Option<BookLoan>> {
        self.complete_loan_impl(id, return_date, fine_amount).await
    }

    // 考试模块
    async fn create_exam(&self, req: CreateExamRequest, created_by: i64) -> Result<Exam> {
        self.create_exam_impl(req, created_by).await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn list_exams(&self, query: ExamListQuery) -> Result<ExamListResponse> {
        self.list_exams_impl(query).await
    }

    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    async fn list_exams_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        class_name: Option<&str>,
    ) -> Result<Vec<Exam>> {
        self.list_exams_between_impl(from, to, class_name).await
    }

    async fn list_teacher_classes(&self, user_id: i64) -> Result<Vec<String>> {
        self.list_teacher_classes_impl(user_id).await
    }

    async fn upsert_exam_result(
        &self,
        exam_id: i64,
        student_profile_id: i64,
        marks_obtained: i32,
        grade: &str,
        remarks: Option<String>,
    ) -> Result<ExamResult> {
        self.upsert_exam_result_impl(exam_id, student_profile_id, marks_obtained, grade, remarks)
            .await
    }

    async fn list_results_by_exam(&self, exam_id: i64) -> Result<Vec<ExamResult>> {
        self.list_results_by_exam_impl(exam_id).await
    }

    async fn list_results_by_student(&self, student_profile_id: i64) -> Result<Vec<ExamResult>> {
        self.list_results_by_student_impl(student_profile_id).await
    }

    async fn delete_exam_result(&self, id: i64) -> Result<bool> {
        self.delete_exam_result_impl(id).await
    }

    async fn list_student_marks(&self, student_profile_id: i64) -> Result<Vec<(i32, i32)>> {
        self.list_student_marks_impl(student_profile_id).await
    }

    async fn upsert_performance(
        &self,
        student_profile_id: i64,
        semester: &str,
        attendance_percentage: f64,
        average_marks: f64,
        grade: &str,
    ) -> Result<StudentPerformance> {
        self.upsert_performance_impl(
            student_profile_id,
            semester,
            attendance_percentage,
            average_marks,
            grade,
        )
        .await
    }

    async fn get_performance(
        &self,
        student_profile_id: i64,
        semester: &str,
    ) -> Result<Option<StudentPerformance>> {
        self.get_performance_impl(student_profile_id, semester).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        req: CreateAssignmentRequest,
        created_by: i64,
    ) -> Result<Assignment> {
        self.create_assignment_impl(req, created_by).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_impl(query).await
    }

    async fn list_assignments_by_class(&self, class_name: &str) -> Result<Vec<Assignment>> {
        self.list_assignments_by_class_impl(class_name).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
        content: &str,
    ) -> Result<AssignmentSubmission> {
        self.upsert_submission_impl(assignment_id, student_profile_id, content)
            .await
    }

    async fn get_submission(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
    ) -> Result<Option<AssignmentSubmission>> {
        self.get_submission_impl(assignment_id, student_profile_id)
            .await
    }

    async fn list_submissions_by_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<AssignmentSubmission>> {
        self.list_submissions_by_assignment_impl(assignment_id).await
    }

    async fn list_submissions_by_student(
        &self,
        student_profile_id: i64,
    ) -> Result<Vec<AssignmentSubmission>> {
        self.list_submissions_by_student_impl(student_profile_id)
            .await
    }

    async fn grade_submission(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
        marks_obtained: i32,
        grade: &str,
        feedback: Option<String>,
    ) -> Result<Option<AssignmentSubmission>> {
        self.grade_submission_impl(
            assignment_id,
            student_profile_id,
            marks_obtained,
            grade,
            feedback,
        )
        .await
    }

    // 通知模块
    async fn create_notification(
        &self,
        recipient_id: i64,
        title: &str,
        message: &str,
        kind: NotificationKind,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Notification> {
        self.create_notification_impl(recipient_id, title, message, kind, expires_at)
            .await
    }

    async fn list_notifications(
        &self,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_impl(query).await
    }

    async fn unread_notification_count(&self, recipient_id: i64) -> Result<i64> {
        self.unread_notification_count_impl(recipient_id).await
    }

    async fn mark_notification_read(&self, id: i64, recipient_id: i64) -> Result<bool> {
        self.mark_notification_read_impl(id, recipient_id).await
    }

    async fn mark_all_notifications_read(&self, recipient_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(recipient_id).await
    }

    async fn delete_notification(&self, id: i64, recipient_id: i64) -> Result<bool> {
        self.delete_notification_impl(id, recipient_id).await
    }

    // 公告模块
    async fn create_notice(
        &self,
        author_id: i64,
        author_name: &str,
        message: &str,
    ) -> Result<Notice> {
        self.create_notice_impl(author_id, author_name, message)
            .await
    }

    async fn get_notice_by_id(&self, id: i64) -> Result<Option<Notice>> {
        self.get_notice_by_id_impl(id).await
    }

    async fn list_notices(&self, query: NoticeListQuery) -> Result<NoticeListResponse> {
        self.list_notices_impl(query).await
    }

    async fn delete_notice(&self, id: i64) -> Result<bool> {
        self.delete_notice_impl(id).await
    }

    // 校园事件模块
    async fn create_event(
        &self,
        req: CreateEventRequest,
        organizer_id: i64,
    ) -> Result<SchoolEvent> {
        self.create_event_impl(req, organizer_id).await
    }

    async fn get_event_by_id(&self, id: i64) -> Result<Option<SchoolEvent>> {
        self.get_event_by_id_impl(id).await
    }

    async fn list_events(&self, query: EventListQuery) -> Result<EventListResponse> {
        self.list_events_impl(query).await
    }

    async fn update_event(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<SchoolEvent>> {
        self.update_event_impl(id, update).await
    }

    async fn delete_event(&self, id: i64) -> Result<bool> {
        self.delete_event_impl(id).await
    }
}
