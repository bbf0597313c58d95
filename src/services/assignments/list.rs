use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::{AssignmentListParams, AssignmentListQuery};
use crate::models::assignments::responses::{
    StudentAssignmentItem, StudentAssignmentListResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_assignments(
    service: &AssignmentService,
    params: AssignmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = AssignmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        class_name: params.class_name,
        subject: params.subject,
    };

    match storage.list_assignments(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "作业列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list assignments: {e}"),
            )),
        ),
    }
}

/// 学生视角：本班作业按截止时间排列，附上本人提交状态
pub async fn my_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

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

    let assignments = match storage
        .list_assignments_by_class(&student.profile.class_name)
        .await
    {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list assignments: {e}"),
                )),
            );
        }
    };

    let submissions = match storage
        .list_submissions_by_student(student.profile.id)
        .await
    {
        Ok(submissions) => submissions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list submissions: {e}"),
                )),
            );
        }
    };

    let mut by_assignment: HashMap<i64, _> = submissions
        .into_iter()
        .map(|s| (s.assignment_id, s))
        .collect();

    let items = assignments
        .into_iter()
        .map(|assignment| {
            let submission = by_assignment.remove(&assignment.id);
            StudentAssignmentItem {
                assignment,
                submission,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentAssignmentListResponse { items },
        "我的作业",
    )))
}
