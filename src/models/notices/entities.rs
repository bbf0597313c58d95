use serde::{Deserialize, Serialize};

// 公告：面向全体登录用户的广播，发布后不可修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub author_id: i64,
    /// 发布时的显示名，账号改名不回溯
    pub author_name: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
