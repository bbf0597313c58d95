use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_fee_payment(
    service: &FeeService,
    fee_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_fee_payment(fee_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Fee payment deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeePaymentNotFound,
            "Fee payment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fee payment deletion failed: {e}"),
            )),
        ),
    }
}
