use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段须已是 argon2 哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 学生档案管理方法
    // 账号 + 档案在一个事务中创建，任一失败不留痕
    async fn create_student_with_account(
        &self,
        account: CreateUserRequest,
        profile: NewStudentProfile,
    ) -> Result<StudentDetail>;
    // 通过档案ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>>;
    // 通过账号ID获取学生
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentDetail>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生档案
    async fn update_student_profile(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>>;
    // 审批：设置档案状态
    async fn set_student_status(&self, id: i64, status: ProfileStatus) -> Result<bool>;
    // 删除学生（连同账号）
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 学生统计
    async fn student_statistics(&self) -> Result<StudentStatisticsResponse>;
    // 某班在读学生
    async fn list_students_by_class(&self, class_name: &str) -> Result<Vec<StudentDetail>>;

    /// 教师档案管理方法
    async fn create_teacher_with_account(
        &self,
        account: CreateUserRequest,
        profile: NewTeacherProfile,
    ) -> Result<TeacherDetail>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<TeacherDetail>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher_profile(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<TeacherDetail>>;
    async fn set_teacher_status(&self, id: i64, status: ProfileStatus) -> Result<bool>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    async fn teacher_statistics(&self) -> Result<TeacherStatisticsResponse>;
    // 在职教师账号ID（提醒任务用）
    async fn list_active_teacher_user_ids(&self) -> Result<Vec<i64>>;

    /// 考勤方法
    // 点名：同事务内删除并重建 (class, date) 下的全部记录
    async fn replace_attendance(
        &self,
        class_name: &str,
        date: chrono::NaiveDate,
        entries: &[RosterEntry],
    ) -> Result<usize>;
    // 按过滤条件列出考勤记录（按日期、学号升序）
    async fn list_attendance(&self, filter: AttendanceFilter) -> Result<Vec<AttendanceRecord>>;

    /// 费用方法
    async fn create_fee_payment(&self, req: CreateFeePaymentRequest) -> Result<FeePayment>;
    async fn get_fee_payment_by_id(&self, id: i64) -> Result<Option<FeePayment>>;
    async fn list_fee_payments(&self, query: FeeListQuery) -> Result<FeeListResponse>;
    async fn update_fee_payment(
        &self,
        id: i64,
        update: UpdateFeePaymentRequest,
    ) -> Result<Option<FeePayment>>;
    async fn delete_fee_payment(&self, id: i64) -> Result<bool>;
    // 逾期账单：pending 且 due_date 早于指定日期
    async fn list_overdue_fee_payments(&self, as_of: chrono::NaiveDate)
    -> Result<Vec<FeePayment>>;
    // 将逾期的 pending 账单批量翻转为 overdue
    async fn mark_fee_payments_overdue(&self, as_of: chrono::NaiveDate) -> Result<u64>;
    async fn fee_statistics(&self) -> Result<FeeStatisticsResponse>;

    /// 图书馆方法
    async fn create_book(&self, req: CreateBookRequest) -> Result<LibraryBook>;
    async fn get_book_by_id(&self, id: i64) -> Result<Option<LibraryBook>>;
    async fn list_books(&self, query: BookListQuery) -> Result<BookListResponse>;
    async fn update_book(&self, id: i64, update: UpdateBookRequest)
    -> Result<Option<LibraryBook>>;
    async fn delete_book(&self, id: i64) -> Result<bool>;
    // 借出：创建借阅记录并把书翻为 borrowed（同事务）
    async fn create_loan(
        &self,
        book_id: i64,
        borrower_id: i64,
        borrow_date: chrono::NaiveDate,
        due_date: chrono::NaiveDate,
    ) -> Result<BookLoan>;
    async fn get_loan_by_id(&self, id: i64) -> Result<Option<BookLoan>>;
    async fn list_loans_by_borrower(&self, borrower_id: i64) -> Result<Vec<BookLoan>>;
    // 归还：写回归还日期与罚金并把书翻回 available（同事务）
    async fn complete_loan(
        &self,
        id: i64,
        return_date: chrono::NaiveDate,
        fine_amount: i64,
    ) -> Result<Option<BookLoan>>;

    /// 考试方法
    async fn create_exam(&self, req: CreateExamRequest, created_by: i64) -> Result<Exam>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    async fn list_exams(&self, query: ExamListQuery) -> Result<ExamListResponse>;
    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;
    // 某时间窗内的考试（提醒与仪表盘）
    async fn list_exams_between(
        &self,
        from: chrono::DateTime<chrono::Utc>,
        to: chrono::DateTime<chrono::Utc>,
        class_name: Option<&str>,
    ) -> Result<Vec<Exam>>;
    // 教师所授班级（按其创建的考试归并）
    async fn list_teacher_classes(&self, user_id: i64) -> Result<Vec<String>>;
    // 录入/覆盖一条成绩（(exam, student) 唯一）
    async fn upsert_exam_result(
        &self,
        exam_id: i64,
        student_profile_id: i64,
        marks_obtained: i32,
        grade: &str,
        remarks: Option<String>,
    ) -> Result<ExamResult>;
    async fn list_results_by_exam(&self, exam_id: i64) -> Result<Vec<ExamResult>>;
    async fn list_results_by_student(&self, student_profile_id: i64) -> Result<Vec<ExamResult>>;
    async fn delete_exam_result(&self, id: i64) -> Result<bool>;
    // (得分, 满分) 对，用于平均得分率
    async fn list_student_marks(&self, student_profile_id: i64) -> Result<Vec<(i32, i32)>>;

    /// 作业方法
    async fn create_assignment(
        &self,
        req: CreateAssignmentRequest,
        created_by: i64,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 某班全部作业（按截止时间升序），学生视角用
    async fn list_assignments_by_class(&self, class_name: &str) -> Result<Vec<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    // 交作业：(assignment, student) 唯一，重交覆盖内容并清空批改
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
        content: &str,
    ) -> Result<AssignmentSubmission>;
    async fn get_submission(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
    ) -> Result<Option<AssignmentSubmission>>;
    async fn list_submissions_by_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<AssignmentSubmission>>;
    async fn list_submissions_by_student(
        &self,
        student_profile_id: i64,
    ) -> Result<Vec<AssignmentSubmission>>;
    // 批改：写回得分、等级与评语；无提交时返回 None
    async fn grade_submission(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
        marks_obtained: i32,
        grade: &str,
        feedback: Option<String>,
    ) -> Result<Option<AssignmentSubmission>>;

    /// 学业快照方法
    async fn upsert_performance(
        &self,
        student_profile_id: i64,
        semester: &str,
        attendance_percentage: f64,
        average_marks: f64,
        grade: &str,
    ) -> Result<StudentPerformance>;
    async fn get_performance(
        &self,
        student_profile_id: i64,
        semester: &str,
    ) -> Result<Option<StudentPerformance>>;

    /// 通知方法
    async fn create_notification(
        &self,
        recipient_id: i64,
        title: &str,
        message: &str,
        kind: NotificationKind,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<Notification>;
    async fn list_notifications(
        &self,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    async fn unread_notification_count(&self, recipient_id: i64) -> Result<i64>;
    // 只允许收件人翻转已读标记
    async fn mark_notification_read(&self, id: i64, recipient_id: i64) -> Result<bool>;
    async fn mark_all_notifications_read(&self, recipient_id: i64) -> Result<u64>;
    async fn delete_notification(&self, id: i64, recipient_id: i64) -> Result<bool>;

    /// 公告方法
    async fn create_notice(
        &self,
        author_id: i64,
        author_name: &str,
        message: &str,
    ) -> Result<Notice>;
    async fn get_notice_by_id(&self, id: i64) -> Result<Option<Notice>>;
    async fn list_notices(&self, query: NoticeListQuery) -> Result<NoticeListResponse>;
    async fn delete_notice(&self, id: i64) -> Result<bool>;

    /// 校园事件方法
    async fn create_event(&self, req: CreateEventRequest, organizer_id: i64)
    -> Result<SchoolEvent>;
    async fn get_event_by_id(&self, id: i64) -> Result<Option<SchoolEvent>>;
    async fn list_events(&self, query: EventListQuery) -> Result<EventListResponse>;
    async fn update_event(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<SchoolEvent>>;
    async fn delete_event(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
