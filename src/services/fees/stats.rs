use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn fee_statistics(
    service: &FeeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.fee_statistics().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "费用统计"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to compute fee statistics: {e}"),
            )),
        ),
    }
}
