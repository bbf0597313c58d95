use super::entities::EventType;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 创建事件请求
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub location: String,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
}

fn default_is_public() -> bool {
    true
}

// 更新事件请求
#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    pub location: Option<String>,
    pub is_public: Option<bool>,
}

// 事件列表查询参数
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub event_type: Option<EventType>,
    /// 只看未来的事件
    #[serde(default)]
    pub upcoming_only: bool,
}

// 存储层事件查询
#[derive(Debug, Clone, Default)]
pub struct EventListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub event_type: Option<EventType>,
    pub public_only: bool,
    pub starts_after: Option<chrono::DateTime<chrono::Utc>>,
}
