use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Duration, Utc};

use super::DashboardService;
use crate::middlewares::RequireJWT;
use crate::models::dashboard::responses::TeacherDashboardResponse;
use crate::models::notifications::requests::NotificationListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn teacher_dashboard(
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

    let classes = match storage.list_teacher_classes(user_id).await {
        Ok(classes) => classes,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load teacher classes: {e}"),
                )),
            );
        }
    };

    // 未来 7 天的考试，限定在所带班级内
    let now = Utc::now();
    let upcoming_exams = match storage.list_exams_between(now, now + Duration::days(7), None).await
    {
        Ok(exams) => exams
            .into_iter()
            .filter(|exam| classes.contains(&exam.class_name))
            .collect(),
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

    let dashboard = TeacherDashboardResponse {
        classes,
        upcoming_exams,
        recent_notifications,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard, "教师仪表盘")))
}
