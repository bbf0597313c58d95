use super::entities::Notification;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 通知列表响应
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub pagination: PaginationInfo,
}

// 未读数响应
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}
