use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EventService;
use crate::middlewares::RequireJWT;
use crate::models::events::requests::CreateEventRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_event(
    service: &EventService,
    event_data: CreateEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if event_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title must not be empty",
        )));
    }

    if event_data.end_date < event_data.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "End date must not be before start date",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_event(event_data, user_id).await {
        Ok(event) => Ok(HttpResponse::Created().json(ApiResponse::success(event, "事件创建成功"))),
        Err(e) => {
            error!("创建事件失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Event creation failed: {e}"),
                )),
            )
        }
    }
}
