use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Duration, Utc};

use super::DashboardService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::AttendanceFilter;
use crate::models::dashboard::responses::StudentDashboardResponse;
use crate::models::notifications::requests::NotificationListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::attendance::aggregate::aggregate;

pub async fn student_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    let student = match storage.get_student_by_user_id(user_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "No student profile for current user",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load student profile: {e}"),
                )),
            );
        }
    };

    let filter = AttendanceFilter {
        class_name: Some(student.profile.class_name.clone()),
        date: None,
        from: None,
        to: None,
        roll_number: Some(student.profile.roll_number),
    };
    let attendance_percentage = match storage.list_attendance(filter).await {
        Ok(records) => aggregate(&records).percentage,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load attendance: {e}"),
                )),
            );
        }
    };

    let now = Utc::now();
    let upcoming_exams = match storage
        .list_exams_between(
            now,
            now + Duration::days(7),
            Some(student.profile.class_name.as_str()),
        )
        .await
    {
        Ok(exams) => exams,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load upcoming exams: {e}"),
                )),
            );
        }
    };

    let notifications_query = NotificationListQuery {
        page: Some(1),
        size: Some(5),
        recipient_id: Some(user_id),
        unread_only: false,
    };
    let recent_notifications = match storage.list_notifications(notifications_query).await {
        Ok(response) => response.items,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load notifications: {e}"),
                )),
            );
        }
    };

    let dashboard = StudentDashboardResponse {
        attendance_percentage,
        upcoming_exams,
        recent_notifications,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard, "学生仪表盘")))
}
