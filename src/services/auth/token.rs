use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, auth::responses::RefreshTokenResponse};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 用 refresh token cookie 换新的 access token
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Refresh token not found",
        )));
    };

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
            },
            "Token refreshed",
        ))),
        Err(e) => {
            tracing::debug!("Refresh token rejected: {}", e);
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Invalid or expired refresh token",
            )))
        }
    }
}

/// 验证当前 access token（由 JWT 中间件保证有效性）
pub async fn handle_verify_token(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Token is valid")))
}
