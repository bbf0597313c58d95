use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::RegisterRequest,
    auth::responses::RegisterResponse,
    students::entities::ProfileStatus,
    students::requests::NewStudentProfile,
    teachers::requests::NewTeacherProfile,
    users::entities::UserRole,
    users::requests::CreateUserRequest,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_class_name, validate_email, validate_password, validate_roll_number,
    validate_username,
};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 字段校验
    if let Err(msg) = validate_username(&register_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    let password_check = validate_password(&register_request.password);
    if !password_check.is_valid {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            password_check.error_message(),
        )));
    }

    // 2. 角色校验：自助注册只开放学生与教师
    let role = match register_request.role.parse::<UserRole>() {
        Ok(role @ (UserRole::Student | UserRole::Teacher)) => role,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                "Registration is only open to students and teachers",
            )));
        }
    };

    // 3. 唯一性检查
    match storage.get_user_by_username(&register_request.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Username is already taken",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to check username: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Registration failed",
                )),
            );
        }
    }

    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email is already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to check email: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Registration failed",
                )),
            );
        }
    }

    // 4. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Registration failed",
                )),
            );
        }
    };

    let account = CreateUserRequest {
        username: register_request.username,
        email: register_request.email,
        password: password_hash,
        role: role.clone(),
        full_name: register_request.full_name,
        mobile: register_request.mobile.clone(),
    };

    // 5. 建号 + 待审批档案（事务）
    let created = match role {
        UserRole::Student => {
            let Some(class_name) = register_request.class_name else {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "class_name is required for student registration",
                )));
            };
            let Some(roll_number) = register_request.roll_number else {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "roll_number is required for student registration",
                )));
            };

            if let Err(msg) = validate_class_name(&class_name) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::RegisterFailed, msg)));
            }
            if let Err(msg) = validate_roll_number(roll_number) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::RegisterFailed, msg)));
            }

            let profile = NewStudentProfile {
                class_name,
                roll_number,
                fee: None,
                mobile: register_request.mobile,
                status: ProfileStatus::Pending,
            };

            storage
                .create_student_with_account(account, profile)
                .await
                .map(|detail| (detail.username, detail.profile.user_id))
        }
        _ => {
            let profile = NewTeacherProfile {
                salary: register_request.salary.unwrap_or(0),
                mobile: register_request.mobile,
                join_date: chrono::Utc::now().date_naive(),
                status: ProfileStatus::Pending,
            };

            storage
                .create_teacher_with_account(account, profile)
                .await
                .map(|detail| (detail.username, detail.profile.user_id))
        }
    };

    match created {
        Ok((username, user_id)) => {
            tracing::info!("User {} registered, profile pending approval", username);
            match storage.get_user_by_id(user_id).await {
                Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    RegisterResponse {
                        user,
                        profile_status: ProfileStatus::Pending.to_string(),
                    },
                    "Registration successful, awaiting approval",
                ))),
                _ => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                    "Registration successful, awaiting approval",
                ))),
            }
        }
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Registration failed: {e}"),
                )),
            )
        }
    }
}
