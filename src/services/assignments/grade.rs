use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::assignments::requests::GradeSubmissionRequest;
use crate::models::assignments::responses::SubmissionListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::grading::grade_for_marks;

pub async fn list_submissions(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
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
    }

    match storage.list_submissions_by_assignment(assignment_id).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(SubmissionListResponse { items }, "提交列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list submissions: {e}"),
            )),
        ),
    }
}

/// 批改一份提交；等级由成绩计算器在保存前算出
pub async fn grade_submission(
    service: &AssignmentService,
    assignment_id: i64,
    grade_data: GradeSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    let grade = match grade_for_marks(
        grade_data.marks_obtained as f64,
        assignment.max_marks as f64,
    ) {
        Ok(grade) => grade,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::SubmissionInvalid,
                e.message().to_string(),
            )));
        }
    };

    match storage
        .grade_submission(
            assignment_id,
            grade_data.student_profile_id,
            grade_data.marks_obtained,
            grade.as_str(),
            grade_data.feedback,
        )
        .await
    {
        Ok(Some(submission)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "作业已批改")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => {
            error!("批改作业失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to grade submission: {e}"),
                )),
            )
        }
    }
}
