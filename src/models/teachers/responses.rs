use super::entities::TeacherDetail;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 教师列表响应
#[derive(Debug, Serialize)]
pub struct TeacherListResponse {
    pub items: Vec<TeacherDetail>,
    pub pagination: PaginationInfo,
}

// 教师统计响应
#[derive(Debug, Serialize)]
pub struct TeacherStatisticsResponse {
    pub total: i64,
    pub active: i64,
    pub pending: i64,
    /// 在职教师平均薪资，无人时为 0
    pub average_salary: f64,
}
