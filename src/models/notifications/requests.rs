use super::entities::NotificationKind;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 手工下发通知（管理员）
#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    pub recipient_id: i64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 通知列表查询参数
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default)]
    pub unread_only: bool,
}

// 存储层通知查询
#[derive(Debug, Clone, Default)]
pub struct NotificationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub recipient_id: Option<i64>,
    pub unread_only: bool,
}
