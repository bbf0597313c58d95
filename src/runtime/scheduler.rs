//! 周期提醒任务。所有下发都是尽力而为，单条失败只记日志。

use chrono::{Duration as ChronoDuration, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::models::notifications::entities::NotificationKind;
use crate::services::notifications::dispatch;
use crate::services::websocket::RealtimeHub;
use crate::storage::Storage;

/// 启动提醒调度器。reminders_enabled 为 false 时不做任何事。
pub fn spawn_reminder_scheduler(
    storage: Arc<dyn Storage>,
    hub: Arc<RealtimeHub>,
) -> Option<JoinHandle<()>> {
    let config = AppConfig::get();
    if !config.school.reminders_enabled {
        info!("Reminder scheduler disabled by configuration");
        return None;
    }

    let period = Duration::from_secs(config.school.reminder_interval_secs);
    info!("Reminder scheduler started, period: {:?}", period);

    Some(tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // 第一个 tick 立即触发，跳过它，让首轮提醒在一个完整周期后发出
        interval.tick().await;

        loop {
            interval.tick().await;
            debug!("Running reminder sweeps");
            attendance_sweep(&storage, &hub).await;
            fee_sweep(&storage, &hub).await;
            exam_sweep(&storage, &hub).await;
        }
    }))
}

/// 提醒在职教师点名
async fn attendance_sweep(storage: &Arc<dyn Storage>, hub: &Arc<RealtimeHub>) {
    let teacher_ids = match storage.list_active_teacher_user_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            warn!("Attendance sweep failed to list teachers: {}", e);
            return;
        }
    };

    for user_id in teacher_ids {
        if let Err(e) = dispatch(
            storage,
            Some(hub.as_ref()),
            user_id,
            "Attendance reminder",
            "Please remember to take attendance for your classes today.",
            NotificationKind::Attendance,
            None,
        )
        .await
        {
            warn!("Attendance reminder to user {} failed: {}", user_id, e);
        }
    }
}

/// 逾期账单翻转状态并提醒学生
async fn fee_sweep(storage: &Arc<dyn Storage>, hub: &Arc<RealtimeHub>) {
    let today = Utc::now().date_naive();

    match storage.mark_fee_payments_overdue(today).await {
        Ok(flipped) if flipped > 0 => {
            info!("Fee sweep marked {} payment(s) overdue", flipped);
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Fee sweep failed to mark overdue payments: {}", e);
            return;
        }
    }

    let overdue = match storage.list_overdue_fee_payments(today).await {
        Ok(payments) => payments,
        Err(e) => {
            warn!("Fee sweep failed to list overdue payments: {}", e);
            return;
        }
    };

    for payment in overdue {
        // 账单挂在学生档案上，提醒要发到账号
        let student = match storage.get_student_by_id(payment.student_profile_id).await {
            Ok(Some(student)) => student,
            Ok(None) => continue,
            Err(e) => {
                warn!(
                    "Fee sweep failed to resolve student {}: {}",
                    payment.student_profile_id, e
                );
                continue;
            }
        };

        let message = format!(
            "Your fee payment of {} due on {} is overdue. Please settle it as soon as possible.",
            payment.amount, payment.due_date
        );
        if let Err(e) = dispatch(
            storage,
            Some(hub.as_ref()),
            student.profile.user_id,
            "Fee payment overdue",
            &message,
            NotificationKind::Fee,
            None,
        )
        .await
        {
            warn!(
                "Fee reminder to user {} failed: {}",
                student.profile.user_id, e
            );
        }
    }
}

/// 未来一天内有考试的班级，提醒其学生
async fn exam_sweep(storage: &Arc<dyn Storage>, hub: &Arc<RealtimeHub>) {
    let now = Utc::now();
    let exams = match storage
        .list_exams_between(now, now + ChronoDuration::days(1), None)
        .await
    {
        Ok(exams) => exams,
        Err(e) => {
            warn!("Exam sweep failed to list exams: {}", e);
            return;
        }
    };

    for exam in exams {
        let students = match storage.list_students_by_class(&exam.class_name).await {
            Ok(students) => students,
            Err(e) => {
                warn!(
                    "Exam sweep failed to list students of class {}: {}",
                    exam.class_name, e
                );
                continue;
            }
        };

        let message = format!(
            "Exam '{}' ({}) is scheduled at {}. Good luck!",
            exam.name,
            exam.subject,
            exam.exam_date.format("%Y-%m-%d %H:%M")
        );
        for student in students {
            if let Err(e) = dispatch(
                storage,
                Some(hub.as_ref()),
                student.profile.user_id,
                "Upcoming exam reminder",
                &message,
                NotificationKind::Exam,
                Some(exam.exam_date),
            )
            .await
            {
                warn!(
                    "Exam reminder to user {} failed: {}",
                    student.profile.user_id, e
                );
            }
        }
    }
}
