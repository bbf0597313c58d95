use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_exam(exam_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exam deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Exam deletion failed: {e}"),
            )),
        ),
    }
}
