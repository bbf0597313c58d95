use super::entities::SchoolEvent;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 事件列表响应
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub items: Vec<SchoolEvent>,
    pub pagination: PaginationInfo,
}
