use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::errors::SchoolSystemError;
use crate::models::students::entities::ProfileStatus;
use crate::models::teachers::requests::{CreateTeacherRequest, NewTeacherProfile};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_username};

pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_username(&teacher_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&teacher_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    let password_check = validate_password(&teacher_data.password);
    if !password_check.is_valid {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            password_check.error_message(),
        )));
    }

    if teacher_data.salary < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Salary must be non-negative",
        )));
    }

    let password_hash = match hash_password(&teacher_data.password) {
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

    let account = CreateUserRequest {
        username: teacher_data.username,
        email: teacher_data.email,
        password: password_hash,
        role: UserRole::Teacher,
        full_name: teacher_data.full_name,
        mobile: teacher_data.mobile.clone(),
    };

    // 管理员直建的档案直接生效，入职日期取当天
    let profile = NewTeacherProfile {
        salary: teacher_data.salary,
        mobile: teacher_data.mobile,
        join_date: chrono::Utc::now().date_naive(),
        status: ProfileStatus::Active,
    };

    let storage = service.get_storage(request);

    match storage.create_teacher_with_account(account, profile).await {
        Ok(detail) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(detail, "教师创建成功")))
        }
        Err(e) => {
            let msg = format!("Teacher creation failed: {e}");
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
