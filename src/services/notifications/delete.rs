use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_notification(
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

    match storage.delete_notification(notification_id, user_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Notification deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Notification deletion failed: {e}"),
            )),
        ),
    }
}
