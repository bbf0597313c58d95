use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LibraryService;
use crate::errors::SchoolSystemError;
use crate::models::library::requests::{BookListParams, BookListQuery, CreateBookRequest, UpdateBookRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_book(
    service: &LibraryService,
    book_data: CreateBookRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if book_data.title.trim().is_empty() || book_data.isbn.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title and ISBN must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_book(book_data).await {
        Ok(book) => Ok(HttpResponse::Created().json(ApiResponse::success(book, "图书入库成功"))),
        Err(e) => {
            let msg = format!("Book creation failed: {e}");
            error!("{}", msg);
            if matches!(e, SchoolSystemError::Conflict(_)) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::BookIsbnAlreadyExists,
                    "A book with this ISBN already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn get_book(
    service: &LibraryService,
    book_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_book_by_id(book_id).await {
        Ok(Some(book)) => Ok(HttpResponse::Ok().json(ApiResponse::success(book, "图书信息"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BookNotFound,
            "Book not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get book: {e}"),
            )),
        ),
    }
}

pub async fn list_books(
    service: &LibraryService,
    params: BookListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = BookListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        status: params.status,
        category: params.category,
        search: params.search,
    };

    match storage.list_books(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "馆藏列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list books: {e}"),
            )),
        ),
    }
}

pub async fn update_book(
    service: &LibraryService,
    book_id: i64,
    update_data: UpdateBookRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_book(book_id, update_data).await {
        Ok(Some(book)) => Ok(HttpResponse::Ok().json(ApiResponse::success(book, "图书已更新"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BookNotFound,
            "Book not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Book update failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_book(
    service: &LibraryService,
    book_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_book(book_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Book deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BookNotFound,
            "Book not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Book deletion failed: {e}"),
            )),
        ),
    }
}
