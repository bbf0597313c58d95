use super::entities::PaymentStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 开具缴费单
#[derive(Debug, Deserialize)]
pub struct CreateFeePaymentRequest {
    pub student_profile_id: i64,
    pub amount: i64,
    pub due_date: chrono::NaiveDate,
    pub notes: Option<String>,
}

// 缴费/改单请求
#[derive(Debug, Deserialize)]
pub struct UpdateFeePaymentRequest {
    pub status: Option<PaymentStatus>,
    pub payment_date: Option<chrono::NaiveDate>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
}

// 缴费单列表查询参数
#[derive(Debug, Deserialize)]
pub struct FeeListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub student_profile_id: Option<i64>,
    pub status: Option<PaymentStatus>,
}

// 存储层缴费单查询
#[derive(Debug, Clone, Default)]
pub struct FeeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_profile_id: Option<i64>,
    pub status: Option<PaymentStatus>,
}
