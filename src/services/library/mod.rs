pub mod books;
pub mod borrow;
pub mod loans;
pub mod returns;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::library::requests::{
    BookListParams, BorrowBookRequest, CreateBookRequest, ReturnBookRequest, UpdateBookRequest,
};
use crate::storage::Storage;

pub struct LibraryService {
    storage: Option<Arc<dyn Storage>>,
}

impl LibraryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .map(|data| data.get_ref().clone())
                .expect("Storage not found in app data"),
        }
    }

    pub(crate) fn get_config(&self) -> &'static AppConfig {
        AppConfig::get()
    }

    // 图书入库
    pub async fn create_book(
        &self,
        book_data: CreateBookRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        books::create_book(self, book_data, request).await
    }

    // 图书详情
    pub async fn get_book(&self, book_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        books::get_book(self, book_id, request).await
    }

    // 馆藏列表
    pub async fn list_books(
        &self,
        params: BookListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        books::list_books(self, params, request).await
    }

    // 图书信息更新
    pub async fn update_book(
        &self,
        book_id: i64,
        update_data: UpdateBookRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        books::update_book(self, book_id, update_data, request).await
    }

    // 图书出库
    pub async fn delete_book(
        &self,
        book_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        books::delete_book(self, book_id, request).await
    }

    // 借书
    pub async fn borrow_book(
        &self,
        borrow_data: BorrowBookRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        borrow::borrow_book(self, borrow_data, request).await
    }

    // 还书（结算罚金）
    pub async fn return_book(
        &self,
        loan_id: i64,
        return_data: ReturnBookRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        returns::return_book(self, loan_id, return_data, request).await
    }

    // 借阅记录
    pub async fn list_loans(
        &self,
        borrower_id: Option<i64>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        loans::list_loans(self, borrower_id, request).await
    }
}
