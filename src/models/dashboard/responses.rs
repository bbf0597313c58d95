use crate::models::events::entities::SchoolEvent;
use crate::models::exams::entities::Exam;
use crate::models::notifications::entities::Notification;
use serde::Serialize;

// 管理员仪表盘
#[derive(Debug, Serialize)]
pub struct AdminDashboardResponse {
    pub active_teachers: i64,
    pub pending_teachers: i64,
    pub active_students: i64,
    pub pending_students: i64,
    pub upcoming_events: Vec<SchoolEvent>,
}

// 教师仪表盘
#[derive(Debug, Serialize)]
pub struct TeacherDashboardResponse {
    /// 所带班级（按所授考试归并）
    pub classes: Vec<String>,
    pub upcoming_exams: Vec<Exam>,
    pub recent_notifications: Vec<Notification>,
}

// 学生仪表盘
#[derive(Debug, Serialize)]
pub struct StudentDashboardResponse {
    pub attendance_percentage: f64,
    pub upcoming_exams: Vec<Exam>,
    pub recent_notifications: Vec<Notification>,
}
