use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 注销：清空 refresh token cookie
pub async fn handle_logout(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::success_empty("Logged out")))
}
