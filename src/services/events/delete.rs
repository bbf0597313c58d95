use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_event(
    service: &EventService,
    event_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_event(event_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Event deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Event deletion failed: {e}"),
            )),
        ),
    }
}
