use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "作业详情")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get assignment: {e}"),
            )),
        ),
    }
}
