use super::entities::Notice;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 公告列表响应
#[derive(Debug, Serialize)]
pub struct NoticeListResponse {
    pub items: Vec<Notice>,
    pub pagination: PaginationInfo,
}
