use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_fee_payment(
    service: &FeeService,
    fee_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let payment = match storage.get_fee_payment_by_id(fee_id).await {
        Ok(Some(payment)) => payment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FeePaymentNotFound,
                "Fee payment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get fee payment: {e}"),
                )),
            );
        }
    };

    // 学生只能查看自己的缴费单
    if let Some(user) = RequireJWT::extract_user(request)
        && user.role == UserRole::Student
    {
        let own = storage
            .get_student_by_user_id(user.id)
            .await
            .ok()
            .flatten()
            .is_some_and(|detail| detail.profile.id == payment.student_profile_id);
        if !own {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Students can only view their own fee payments",
            )));
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(payment, "缴费单信息")))
}
