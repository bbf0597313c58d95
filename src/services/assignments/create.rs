use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::notifications::entities::NotificationKind;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::notifications::dispatch;
use crate::utils::validate::validate_class_name;

pub async fn create_assignment(
    service: &AssignmentService,
    assignment_data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if assignment_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Assignment title must not be empty",
        )));
    }

    if let Err(msg) = validate_class_name(&assignment_data.class_name) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if assignment_data.max_marks <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Max marks must be positive",
        )));
    }

    let storage = service.get_storage(request);

    let assignment = match storage.create_assignment(assignment_data, user_id).await {
        Ok(assignment) => assignment,
        Err(e) => {
            error!("布置作业失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Assignment creation failed: {e}"),
                )),
            );
        }
    };

    // 通知本班在读学生，失败不影响布置结果
    let hub = service.get_hub(request);
    match storage.list_students_by_class(&assignment.class_name).await {
        Ok(students) => {
            let title = format!("新作业: {}", assignment.title);
            let message = format!(
                "{} 科目布置了新作业，截止 {}",
                assignment.subject,
                assignment.due_date.format("%Y-%m-%d %H:%M")
            );
            for student in students {
                if let Err(e) = dispatch(
                    &storage,
                    hub.as_deref(),
                    student.profile.user_id,
                    &title,
                    &message,
                    NotificationKind::Assignment,
                    Some(assignment.due_date),
                )
                .await
                {
                    warn!("作业通知派发给用户 {} 失败: {}", student.profile.user_id, e);
                }
            }
        }
        Err(e) => {
            warn!("布置作业后查询班级学生失败: {}", e);
        }
    }

    Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "作业布置成功")))
}
