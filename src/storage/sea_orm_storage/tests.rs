//! 存储层集成测试，跑在内存 SQLite 上

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

use super::SeaOrmStorage;
use crate::errors::SchoolSystemError;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::attendance::entities::AttendanceStatus;
use crate::models::attendance::requests::{AttendanceFilter, RosterEntry};
use crate::models::notifications::entities::NotificationKind;
use crate::models::students::entities::ProfileStatus;
use crate::models::students::requests::NewStudentProfile;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::services::notifications::dispatch;
use crate::storage::Storage;

/// 单连接的内存库：多连接会各自拿到独立的空库
async fn memory_storage() -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1);

    let db = Database::connect(opt)
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    SeaOrmStorage { db }
}

fn account(username: &str, email: &str, role: UserRole) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        // 存储层不碰密码，服务层已经替换为哈希
        password: "hashed-password".to_string(),
        role,
        full_name: format!("{username} 的姓名"),
        mobile: None,
    }
}

fn profile(class_name: &str, roll_number: i32) -> NewStudentProfile {
    NewStudentProfile {
        class_name: class_name.to_string(),
        roll_number,
        fee: Some(1000),
        mobile: None,
        status: ProfileStatus::Active,
    }
}

#[tokio::test]
async fn test_retake_attendance_replaces_rows() {
    let storage = memory_storage().await;
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let first = vec![
        RosterEntry {
            roll_number: 1,
            status: AttendanceStatus::Present,
        },
        RosterEntry {
            roll_number: 2,
            status: AttendanceStatus::Present,
        },
    ];
    storage
        .replace_attendance_impl("10A", date, &first)
        .await
        .unwrap();

    // 重新点名：同班同日整体替换，学号不增行
    let second = vec![
        RosterEntry {
            roll_number: 1,
            status: AttendanceStatus::Absent,
        },
        RosterEntry {
            roll_number: 2,
            status: AttendanceStatus::Present,
        },
    ];
    storage
        .replace_attendance_impl("10A", date, &second)
        .await
        .unwrap();

    let records = storage
        .list_attendance_impl(AttendanceFilter {
            class_name: Some("10A".to_string()),
            date: Some(date),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    let roll_one = records.iter().find(|r| r.roll_number == 1).unwrap();
    assert_eq!(roll_one.status, AttendanceStatus::Absent);
    let roll_two = records.iter().find(|r| r.roll_number == 2).unwrap();
    assert_eq!(roll_two.status, AttendanceStatus::Present);
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let storage = memory_storage().await;

    storage
        .create_student_with_account_impl(
            account("zhang3", "zhang3@school.local", UserRole::Student),
            profile("10A", 1),
        )
        .await
        .unwrap();

    // 同名账号，学号不同
    let err = storage
        .create_student_with_account_impl(
            account("zhang3", "other@school.local", UserRole::Student),
            profile("10A", 2),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SchoolSystemError::Conflict(_)));

    // 第一条不受影响
    let existing = storage.get_user_by_username_impl("zhang3").await.unwrap();
    assert!(existing.is_some());
}

#[tokio::test]
async fn test_duplicate_roll_rolls_back_account() {
    let storage = memory_storage().await;

    storage
        .create_student_with_account_impl(
            account("li4", "li4@school.local", UserRole::Student),
            profile("10A", 7),
        )
        .await
        .unwrap();

    // 新账号名可用，但学号与已有档案冲突：档案插入失败，账号必须一并回滚
    let err = storage
        .create_student_with_account_impl(
            account("wang5", "wang5@school.local", UserRole::Student),
            profile("10A", 7),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SchoolSystemError::Conflict(_)));

    let orphan = storage.get_user_by_username_impl("wang5").await.unwrap();
    assert!(orphan.is_none(), "冲突回滚后不应留下孤儿账号");
}

#[tokio::test]
async fn test_dispatch_persists_when_mail_fails() {
    let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);

    // 收件地址解析必然失败，邮件通道一定报错
    let recipient = storage
        .create_user(account("mail_fail", "not a mailbox", UserRole::Teacher))
        .await
        .unwrap();

    let result = dispatch(
        &storage,
        None,
        recipient.id,
        "测试通知",
        "邮件失败也要落库",
        NotificationKind::General,
        None,
    )
    .await;

    assert!(result.is_ok(), "邮件失败不应影响派发结果");

    let unread = storage.unread_notification_count(recipient.id).await.unwrap();
    assert_eq!(unread, 1);
}

#[tokio::test]
async fn test_resubmission_clears_grading() {
    let storage = memory_storage().await;

    let teacher = storage
        .create_user_impl(account("teacher1", "teacher1@school.local", UserRole::Teacher))
        .await
        .unwrap();
    let student = storage
        .create_student_with_account_impl(
            account("stu1", "stu1@school.local", UserRole::Student),
            profile("10A", 1),
        )
        .await
        .unwrap();

    let assignment = storage
        .create_assignment_impl(
            CreateAssignmentRequest {
                title: "第三章习题".to_string(),
                description: String::new(),
                subject: "数学".to_string(),
                class_name: "10A".to_string(),
                due_date: Utc::now() + Duration::days(7),
                max_marks: 100,
            },
            teacher.id,
        )
        .await
        .unwrap();

    storage
        .upsert_submission_impl(assignment.id, student.profile.id, "第一版答案")
        .await
        .unwrap();

    let graded = storage
        .grade_submission_impl(assignment.id, student.profile.id, 85, "A", None)
        .await
        .unwrap()
        .unwrap();
    assert!(graded.is_graded());

    // 重交覆盖内容并清空批改
    let resubmitted = storage
        .upsert_submission_impl(assignment.id, student.profile.id, "修订后的答案")
        .await
        .unwrap();

    assert_eq!(resubmitted.content, "修订后的答案");
    assert!(!resubmitted.is_graded());
    assert!(resubmitted.grade.is_none());
    assert!(resubmitted.feedback.is_none());

    // 每个学生仍然只有一条提交
    let submissions = storage
        .list_submissions_by_assignment_impl(assignment.id)
        .await
        .unwrap();
    assert_eq!(submissions.len(), 1);
}

#[tokio::test]
async fn test_notice_post_and_delete() {
    let storage = memory_storage().await;

    let author = storage
        .create_user_impl(account("admin1", "admin1@school.local", UserRole::Admin))
        .await
        .unwrap();

    let notice = storage
        .create_notice_impl(author.id, "教务处", "下周一全校停课")
        .await
        .unwrap();
    assert_eq!(notice.author_name, "教务处");

    let listed = storage
        .list_notices_impl(Default::default())
        .await
        .unwrap();
    assert_eq!(listed.items.len(), 1);

    assert!(storage.delete_notice_impl(notice.id).await.unwrap());
    assert!(!storage.delete_notice_impl(notice.id).await.unwrap());
}
