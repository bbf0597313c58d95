use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::notifications::requests::{NotificationListParams, NotificationListQuery};
use crate::models::notifications::responses::UnreadCountResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_notifications(
    service: &NotificationService,
    params: NotificationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    let query = NotificationListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        recipient_id: Some(user_id),
        unread_only: params.unread_only,
    };

    match storage.list_notifications(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "通知列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list notifications: {e}"),
            )),
        ),
    }
}

pub async fn unread_count(
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

    match storage.unread_notification_count(user_id).await {
        Ok(unread) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(UnreadCountResponse { unread }, "未读数"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to count notifications: {e}"),
            )),
        ),
    }
}
