use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 布置作业请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subject: String,
    pub class_name: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub max_marks: i32,
}

// 作业列表查询参数
#[derive(Debug, Deserialize)]
pub struct AssignmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_name: Option<String>,
    pub subject: Option<String>,
}

// 存储层作业查询
#[derive(Debug, Clone, Default)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_name: Option<String>,
    pub subject: Option<String>,
}

// 学生提交作业请求
#[derive(Debug, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub content: String,
}

// 批改请求；grade 由服务端计算，不接受客户端提交
#[derive(Debug, Deserialize)]
pub struct GradeSubmissionRequest {
    pub student_profile_id: i64,
    pub marks_obtained: i32,
    pub feedback: Option<String>,
}
