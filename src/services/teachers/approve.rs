use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::students::entities::ProfileStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 审批注册产生的待定档案，使其生效
pub async fn approve_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let detail = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get teacher: {e}"),
                )),
            );
        }
    };

    if detail.profile.status != ProfileStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ProfileNotPending,
            "Profile is not pending approval",
        )));
    }

    match storage
        .set_teacher_status(teacher_id, ProfileStatus::Active)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("教师档案已审批"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Teacher approval failed: {e}"),
            )),
        ),
    }
}
