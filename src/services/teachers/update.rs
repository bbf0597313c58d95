use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: i64,
    update_data: UpdateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(salary) = update_data.salary
        && salary < 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Salary must be non-negative",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_teacher_profile(teacher_id, update_data).await {
        Ok(Some(detail)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "教师档案已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Teacher update failed: {e}"),
            )),
        ),
    }
}
