use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::errors::SchoolSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_username};

fn validate_new_account(user_data: &CreateUserRequest) -> Result<(), (ErrorCode, String)> {
    if let Err(msg) = validate_username(&user_data.username) {
        return Err((ErrorCode::UserNameInvalid, msg.to_string()));
    }
    if let Err(msg) = validate_email(&user_data.email) {
        return Err((ErrorCode::UserEmailInvalid, msg.to_string()));
    }
    let password_check = validate_password(&user_data.password);
    if !password_check.is_valid {
        return Err((
            ErrorCode::UserPasswordInvalid,
            password_check.error_message(),
        ));
    }
    Ok(())
}

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err((code, msg)) = validate_new_account(&user_data) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(code, msg)));
    }

    // 入库前替换为哈希，明文不出本函数
    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    match storage.create_user(user_data).await {
        Ok(user) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(UserResponse { user }, "用户创建成功"))),
        Err(e) => {
            let msg = format!("User creation failed: {e}");
            error!("{}", msg);
            if matches!(e, SchoolSystemError::Conflict(_)) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username or email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
