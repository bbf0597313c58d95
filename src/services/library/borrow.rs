use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LibraryService;
use crate::models::library::entities::BookStatus;
use crate::models::library::requests::BorrowBookRequest;
use crate::models::library::responses::LoanResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn borrow_book(
    service: &LibraryService,
    borrow_data: BorrowBookRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let borrow_date = chrono::Utc::now().date_naive();

    if borrow_data.due_date <= borrow_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Due date must be after today",
        )));
    }

    // 图书必须在馆
    match storage.get_book_by_id(borrow_data.book_id).await {
        Ok(Some(book)) => {
            if book.status != BookStatus::Available {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::BookNotAvailable,
                    "Book is not available for borrowing",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BookNotFound,
                "Book not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get book: {e}"),
                )),
            );
        }
    }

    // 借阅人必须存在
    match storage.get_user_by_id(borrow_data.borrower_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Borrower not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get borrower: {e}"),
                )),
            );
        }
    }

    match storage
        .create_loan(
            borrow_data.book_id,
            borrow_data.borrower_id,
            borrow_date,
            borrow_data.due_date,
        )
        .await
    {
        Ok(loan) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(LoanResponse { loan }, "借阅成功")))
        }
        Err(e) => {
            error!("借书失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to borrow book: {e}"),
                )),
            )
        }
    }
}
