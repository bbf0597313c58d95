use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{NotificationService, dispatch};
use crate::models::notifications::requests::SendNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn send_notification(
    service: &NotificationService,
    send_data: SendNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if send_data.title.trim().is_empty() || send_data.message.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title and message must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    // 收件人必须存在
    match storage.get_user_by_id(send_data.recipient_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Recipient not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get recipient: {e}"),
                )),
            );
        }
    }

    let hub = service.get_hub(request);

    match dispatch(
        &storage,
        hub.as_deref(),
        send_data.recipient_id,
        &send_data.title,
        &send_data.message,
        send_data.kind,
        send_data.expires_at,
    )
    .await
    {
        Ok(notification) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(notification, "通知已发送")))
        }
        Err(e) => {
            error!("通知派发失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Notification dispatch failed: {e}"),
                )),
            )
        }
    }
}
