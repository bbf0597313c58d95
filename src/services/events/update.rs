use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::events::requests::UpdateEventRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_event(
    service: &EventService,
    event_id: i64,
    update_data: UpdateEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let (Some(start), Some(end)) = (update_data.start_date, update_data.end_date)
        && end < start
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "End date must not be before start date",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_event(event_id, update_data).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(event, "事件已更新"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Event update failed: {e}"),
            )),
        ),
    }
}
