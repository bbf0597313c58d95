use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除作业，提交记录随之级联删除
pub async fn delete_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_assignment(assignment_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Assignment deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Assignment deletion failed: {e}"),
            )),
        ),
    }
}
