use super::entities::ProfileStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_name: Option<String>,
    pub status: Option<ProfileStatus>,
    pub search: Option<String>,
}

// 管理员直接创建学生（账号 + 档案一次建立，免审批）
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub class_name: String,
    pub roll_number: i32,
    pub fee: Option<i64>,
    pub mobile: Option<String>,
}

// 学生档案更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub class_name: Option<String>,
    pub roll_number: Option<i32>,
    pub fee: Option<i64>,
    pub mobile: Option<String>,
}

// 存储层建档数据（账号已存在或与账号一并创建）
#[derive(Debug, Clone)]
pub struct NewStudentProfile {
    pub class_name: String,
    pub roll_number: i32,
    pub fee: Option<i64>,
    pub mobile: Option<String>,
    pub status: ProfileStatus,
}

// 存储层学生列表查询
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_name: Option<String>,
    pub status: Option<ProfileStatus>,
    pub search: Option<String>,
}
