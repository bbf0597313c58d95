use super::entities::ExamType;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 创建考试请求
#[derive(Debug, Deserialize)]
pub struct CreateExamRequest {
    pub name: String,
    pub exam_type: ExamType,
    pub subject: String,
    pub class_name: String,
    pub exam_date: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i32,
    pub max_marks: i32,
    #[serde(default)]
    pub instructions: String,
}

// 更新考试请求
#[derive(Debug, Deserialize)]
pub struct UpdateExamRequest {
    pub name: Option<String>,
    pub exam_type: Option<ExamType>,
    pub subject: Option<String>,
    pub exam_date: Option<chrono::DateTime<chrono::Utc>>,
    pub duration_minutes: Option<i32>,
    pub max_marks: Option<i32>,
    pub instructions: Option<String>,
}

// 考试列表查询参数
#[derive(Debug, Deserialize)]
pub struct ExamListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_name: Option<String>,
    pub exam_type: Option<ExamType>,
}

// 存储层考试查询
#[derive(Debug, Clone, Default)]
pub struct ExamListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_name: Option<String>,
    pub exam_type: Option<ExamType>,
}

// 录入成绩请求；grade 由服务端计算，不接受客户端提交
#[derive(Debug, Deserialize)]
pub struct RecordResultRequest {
    pub student_profile_id: i64,
    pub marks_obtained: i32,
    pub remarks: Option<String>,
}

// 学业快照重算请求
#[derive(Debug, Deserialize)]
pub struct CalculatePerformanceRequest {
    pub semester: String,
}
