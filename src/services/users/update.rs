use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UpdateUserRequest, responses::UserResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 改密码时先过策略再哈希
    if let Some(ref password) = update_data.password {
        let password_check = validate_password(password);
        if !password_check.is_valid {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserPasswordInvalid,
                password_check.error_message(),
            )));
        }

        match hash_password(password) {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Password hashing failed: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }, "用户已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserUpdateFailed,
                format!("User update failed: {e}"),
            )),
        ),
    }
}
