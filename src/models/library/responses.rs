use super::entities::{BookLoan, LibraryBook};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 图书列表响应
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub items: Vec<LibraryBook>,
    pub pagination: PaginationInfo,
}

// 借阅响应
#[derive(Debug, Serialize)]
pub struct LoanResponse {
    pub loan: BookLoan,
}

// 还书响应：含本次结算的罚金
#[derive(Debug, Serialize)]
pub struct ReturnBookResponse {
    pub loan: BookLoan,
    pub fine_amount: i64,
}
