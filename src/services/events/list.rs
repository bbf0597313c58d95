use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::middlewares::RequireJWT;
use crate::models::events::requests::{EventListParams, EventListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_events(
    service: &EventService,
    params: EventListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只看公开事件
    let public_only = RequireJWT::extract_user(request)
        .map(|user| user.role == UserRole::Student)
        .unwrap_or(true);

    let query = EventListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        event_type: params.event_type,
        public_only,
        starts_after: params.upcoming_only.then(chrono::Utc::now),
    };

    match storage.list_events(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "事件列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list events: {e}"),
            )),
        ),
    }
}
