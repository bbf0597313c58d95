use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::exams::requests::CreateExamRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_class_name;

pub async fn create_exam(
    service: &ExamService,
    exam_data: CreateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if exam_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Exam name must not be empty",
        )));
    }

    if let Err(msg) = validate_class_name(&exam_data.class_name) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if exam_data.max_marks <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Max marks must be positive",
        )));
    }

    if exam_data.duration_minutes <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Duration must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_exam(exam_data, user_id).await {
        Ok(exam) => Ok(HttpResponse::Created().json(ApiResponse::success(exam, "考试创建成功"))),
        Err(e) => {
            error!("创建考试失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Exam creation failed: {e}"),
                )),
            )
        }
    }
}
