use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::entities::ProfileStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 审批注册产生的待定档案，使其生效
pub async fn approve_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let detail = match storage.get_student_by_id(student_id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    };

    // 只有待定档案可以审批
    if detail.profile.status != ProfileStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ProfileNotPending,
            "Profile is not pending approval",
        )));
    }

    match storage
        .set_student_status(student_id, ProfileStatus::Active)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("学生档案已审批"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Student approval failed: {e}"),
            )),
        ),
    }
}
