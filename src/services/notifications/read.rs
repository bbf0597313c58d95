use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn mark_read(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 收件人归属在 SQL 过滤里强制
    match storage.mark_notification_read(notification_id, user_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("通知已读"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to mark notification as read: {e}"),
            )),
        ),
    }
}

pub async fn mark_all_read(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.mark_all_notifications_read(user_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            serde_json::json!({ "marked": count }),
            "全部标记已读",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to mark notifications as read: {e}"),
            )),
        ),
    }
}
