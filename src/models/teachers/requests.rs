use crate::models::common::PaginationQuery;
use crate::models::students::entities::ProfileStatus;
use serde::Deserialize;

// 教师列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct TeacherListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<ProfileStatus>,
    pub search: Option<String>,
}

// 管理员直接创建教师
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub salary: i64,
    pub mobile: Option<String>,
}

// 教师档案更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateTeacherRequest {
    pub salary: Option<i64>,
    pub mobile: Option<String>,
}

// 存储层建档数据
#[derive(Debug, Clone)]
pub struct NewTeacherProfile {
    pub salary: i64,
    pub mobile: Option<String>,
    pub join_date: chrono::NaiveDate,
    pub status: ProfileStatus,
}

// 存储层教师列表查询
#[derive(Debug, Clone, Default)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<ProfileStatus>,
    pub search: Option<String>,
}
