use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::errors::SchoolSystemError;
use crate::models::students::entities::ProfileStatus;
use crate::models::students::requests::{CreateStudentRequest, NewStudentProfile};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_class_name, validate_email, validate_password, validate_roll_number,
    validate_username,
};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证账号字段
    if let Err(msg) = validate_username(&student_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    let password_check = validate_password(&student_data.password);
    if !password_check.is_valid {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            password_check.error_message(),
        )));
    }

    // 验证档案字段
    if let Err(msg) = validate_class_name(&student_data.class_name) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if let Err(msg) = validate_roll_number(student_data.roll_number) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let password_hash = match hash_password(&student_data.password) {
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
        username: student_data.username,
        email: student_data.email,
        password: password_hash,
        role: UserRole::Student,
        full_name: student_data.full_name,
        mobile: student_data.mobile.clone(),
    };

    // 管理员直建的档案直接生效
    let profile = NewStudentProfile {
        class_name: student_data.class_name,
        roll_number: student_data.roll_number,
        fee: student_data.fee,
        mobile: student_data.mobile,
        status: ProfileStatus::Active,
    };

    let storage = service.get_storage(request);

    match storage.create_student_with_account(account, profile).await {
        Ok(detail) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(detail, "学生创建成功")))
        }
        Err(e) => {
            let msg = format!("Student creation failed: {e}");
            error!("{}", msg);
            if matches!(e, SchoolSystemError::Conflict(_)) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StudentAlreadyExists,
                    "Username or email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
