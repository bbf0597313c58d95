use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 发布公告请求
#[derive(Debug, Deserialize)]
pub struct PostNoticeRequest {
    pub message: String,
}

// 公告列表查询参数
#[derive(Debug, Deserialize)]
pub struct NoticeListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// 存储层公告查询
#[derive(Debug, Clone, Default)]
pub struct NoticeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}
