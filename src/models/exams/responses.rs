use super::entities::{Exam, ExamResult, StudentPerformance};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 考试列表响应
#[derive(Debug, Serialize)]
pub struct ExamListResponse {
    pub items: Vec<Exam>,
    pub pagination: PaginationInfo,
}

// 成绩列表响应
#[derive(Debug, Serialize)]
pub struct ResultListResponse {
    pub items: Vec<ExamResult>,
}

// 等级分布行
#[derive(Debug, Clone, Serialize)]
pub struct GradeCount {
    pub grade: String,
    pub count: i64,
}

// 学生成绩汇总
#[derive(Debug, Serialize)]
pub struct PerformanceSummaryResponse {
    pub student_profile_id: i64,
    /// 平均得分率（按各科满分归一后 ×100），两位小数
    pub average_marks: f64,
    pub total_exams: i64,
    pub grade_distribution: Vec<GradeCount>,
}

// 学业快照响应
#[derive(Debug, Serialize)]
pub struct PerformanceResponse {
    pub performance: StudentPerformance,
}
