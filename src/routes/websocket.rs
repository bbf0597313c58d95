use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::models::{ApiResponse, ErrorCode};
use crate::services::websocket::{RealtimeHub, WebSocketService};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

/// WebSocket 握手无法携带 Authorization 头，令牌走查询参数
#[derive(Debug, Deserialize)]
pub struct WsConnectParams {
    pub token: String,
}

pub async fn websocket_entry(
    req: HttpRequest,
    query: web::Query<WsConnectParams>,
    body: web::Payload,
) -> ActixResult<HttpResponse> {
    let claims = match JwtUtils::verify_access_token(&query.token) {
        Ok(claims) => claims,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Invalid or expired token",
            )));
        }
    };

    let Ok(user_id) = claims.sub.parse::<i64>() else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Invalid token subject",
        )));
    };

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();
    let hub = req
        .app_data::<web::Data<RealtimeHub>>()
        .expect("RealtimeHub not found in app data")
        .clone()
        .into_inner();

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load user: {e}"),
                )),
            );
        }
    };

    let (response, session, stream) = actix_ws::handle(&req, body)?;

    actix_web::rt::spawn(WebSocketService::handle_connection(
        hub, storage, user, session, stream,
    ));

    Ok(response)
}

// 配置路由
pub fn configure_websocket_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/ws").route("", web::get().to(websocket_entry)));
}
