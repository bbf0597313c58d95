use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NoticeService;
use crate::models::notices::requests::{NoticeListParams, NoticeListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_notices(
    service: &NoticeService,
    params: NoticeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = NoticeListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
    };

    match storage.list_notices(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "公告列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list notices: {e}"),
            )),
        ),
    }
}
