use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_event(
    service: &EventService,
    event_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_event_by_id(event_id).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(event, "事件信息"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get event: {e}"),
            )),
        ),
    }
}
