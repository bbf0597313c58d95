use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_class_name, validate_roll_number};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref class_name) = update_data.class_name
        && let Err(msg) = validate_class_name(class_name)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if let Some(roll_number) = update_data.roll_number
        && let Err(msg) = validate_roll_number(roll_number)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.update_student_profile(student_id, update_data).await {
        Ok(Some(detail)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "学生档案已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Student update failed: {e}"),
            )),
        ),
    }
}
