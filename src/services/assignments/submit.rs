use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 学生提交作业；重交覆盖旧内容并清空已有批改
pub async fn submit_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    submit_data: SubmitAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if submit_data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubmissionInvalid,
            "Submission content must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    let student = match storage.get_student_by_user_id(user.id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student profile not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student profile: {e}"),
                )),
            );
        }
    };

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get assignment: {e}"),
                )),
            );
        }
    };

    // 只能交本班的作业
    if assignment.class_name != student.profile.class_name {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Students can only submit assignments of their own class",
        )));
    }

    match storage
        .upsert_submission(assignment_id, student.profile.id, &submit_data.content)
        .await
    {
        Ok(submission) => Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "作业已提交"))),
        Err(e) => {
            error!("提交作业失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Assignment submission failed: {e}"),
                )),
            )
        }
    }
}
