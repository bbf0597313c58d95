use super::entities::FeePayment;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 缴费单列表响应
#[derive(Debug, Serialize)]
pub struct FeeListResponse {
    pub items: Vec<FeePayment>,
    pub pagination: PaginationInfo,
}

// 费用统计响应
#[derive(Debug, Serialize)]
pub struct FeeStatisticsResponse {
    pub total_amount: i64,
    pub paid_amount: i64,
    pub pending_amount: i64,
    /// 回收率（已缴/应缴），保留两位小数，无账单时为 0
    pub collection_rate: f64,
}
