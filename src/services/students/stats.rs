use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn student_statistics(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.student_statistics().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "学生统计"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to compute student statistics: {e}"),
            )),
        ),
    }
}
