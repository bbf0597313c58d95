use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "教师信息"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get teacher: {e}"),
            )),
        ),
    }
}
