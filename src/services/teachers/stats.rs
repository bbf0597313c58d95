use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn teacher_statistics(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.teacher_statistics().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "教师统计"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to compute teacher statistics: {e}"),
            )),
        ),
    }
}
