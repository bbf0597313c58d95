use super::entities::BookStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 图书入库请求
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub publisher: String,
    pub publication_year: i32,
    pub pages: i32,
}

// 图书信息更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub publisher: Option<String>,
    pub publication_year: Option<i32>,
    pub pages: Option<i32>,
    pub status: Option<BookStatus>,
}

// 图书列表查询参数
#[derive(Debug, Deserialize)]
pub struct BookListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<BookStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
}

// 存储层图书查询
#[derive(Debug, Clone, Default)]
pub struct BookListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<BookStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
}

// 借书请求
#[derive(Debug, Deserialize)]
pub struct BorrowBookRequest {
    pub book_id: i64,
    pub borrower_id: i64,
    pub due_date: chrono::NaiveDate,
}

// 还书请求
#[derive(Debug, Deserialize)]
pub struct ReturnBookRequest {
    /// 缺省为当天
    pub return_date: Option<chrono::NaiveDate>,
}
