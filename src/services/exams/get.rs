use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(exam, "考试信息"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get exam: {e}"),
            )),
        ),
    }
}
