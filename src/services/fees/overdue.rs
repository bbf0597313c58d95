use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode};

/// 逾期账单：pending 且截止日早于今天
pub async fn list_overdue(service: &FeeService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let today = chrono::Utc::now().date_naive();

    match storage.list_overdue_fee_payments(today).await {
        Ok(payments) => Ok(HttpResponse::Ok().json(ApiResponse::success(payments, "逾期账单"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list overdue fee payments: {e}"),
            )),
        ),
    }
}
