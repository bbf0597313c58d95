use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LibraryService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_loans(
    service: &LibraryService,
    borrower_id: Option<i64>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    // 学生只能看自己的借阅记录
    let borrower_id = if user.role == UserRole::Student {
        user.id
    } else {
        borrower_id.unwrap_or(user.id)
    };

    let storage = service.get_storage(request);

    match storage.list_loans_by_borrower(borrower_id).await {
        Ok(loans) => Ok(HttpResponse::Ok().json(ApiResponse::success(loans, "借阅记录"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list loans: {e}"),
            )),
        ),
    }
}
