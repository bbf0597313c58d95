use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误 → 统一 400 响应
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid JSON payload: {err}"),
    ));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误 → 统一 400 响应
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    info!("Query parameter error on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
