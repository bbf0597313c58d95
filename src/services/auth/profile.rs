use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, auth::responses::UserInfoResponse};

use super::AuthService;

/// 当前登录用户信息
pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User info retrieved",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        ))),
    }
}
