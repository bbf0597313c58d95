use crate::models::students::entities::ProfileStatus;
use serde::{Deserialize, Serialize};

// 教师档案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub id: i64,
    pub user_id: i64,
    pub salary: i64,
    pub mobile: Option<String>,
    pub join_date: chrono::NaiveDate,
    pub status: ProfileStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教师档案 + 账号信息的联合视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherDetail {
    #[serde(flatten)]
    pub profile: TeacherProfile,
    pub username: String,
    pub full_name: String,
    pub email: String,
}
