use super::entities::StudentDetail;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 学生列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<StudentDetail>,
    pub pagination: PaginationInfo,
}

// 班级人数分布
#[derive(Debug, Clone, Serialize)]
pub struct ClassCount {
    pub class_name: String,
    pub count: i64,
}

// 学生统计响应
#[derive(Debug, Serialize)]
pub struct StudentStatisticsResponse {
    pub total: i64,
    pub active: i64,
    pub pending: i64,
    pub class_distribution: Vec<ClassCount>,
}

// 批量导入的单行错误
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImportRowError {
    /// 数据行号（表头后第一行为 1）
    pub row: usize,
    pub field: String,
    pub message: String,
}

// 批量导入响应
#[derive(Debug, Serialize)]
pub struct ImportStudentsResponse {
    pub imported_count: usize,
    pub errors: Vec<ImportRowError>,
}
