use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode, auth::requests::LoginRequest, auth::responses::LoginResponse,
    users::entities::UserStatus,
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 用户名和邮箱都可作为登录标识
    let user = match storage
        .get_user_by_username_or_email(&login_request.username)
        .await
    {
        Ok(Some(user)) => user,
        // 不存在与密码错误同文案，不暴露账号是否注册
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Username or password is incorrect",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        )));
    }

    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Account is not active",
        )));
    }

    // 登录时间是尽力而为，失败不阻断登录
    let _ = storage.update_last_login(user.id).await;

    // remember_me 延长 refresh token 有效期
    let refresh_expiry = login_request
        .remember_me
        .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry));

    let token_pair = match user.generate_token_pair(refresh_expiry) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("Token generation failed for user {}: {}", user.id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };

    tracing::info!("User {} logged in", user.username);

    let refresh_cookie = jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);
    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60, // 配置按分钟，响应按秒
        user,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
