use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::fees::requests::CreateFeePaymentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_fee_payment(
    service: &FeeService,
    fee_data: CreateFeePaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if fee_data.amount <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FeePaymentInvalid,
            "Amount must be positive",
        )));
    }

    let storage = service.get_storage(request);

    // 学生档案必须存在
    match storage.get_student_by_id(fee_data.student_profile_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    }

    match storage.create_fee_payment(fee_data).await {
        Ok(payment) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(payment, "缴费单已开具")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fee payment creation failed: {e}"),
            )),
        ),
    }
}
