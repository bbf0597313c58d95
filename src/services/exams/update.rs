use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::requests::UpdateExamRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_exam(
    service: &ExamService,
    exam_id: i64,
    update_data: UpdateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(max_marks) = update_data.max_marks
        && max_marks <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Max marks must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_exam(exam_id, update_data).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(exam, "考试已更新"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Exam update failed: {e}"),
            )),
        ),
    }
}
