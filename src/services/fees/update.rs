use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::fees::entities::PaymentStatus;
use crate::models::fees::requests::UpdateFeePaymentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_fee_payment(
    service: &FeeService,
    fee_id: i64,
    mut update_data: UpdateFeePaymentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 标记已缴而未给出缴费日期时取当天
    if update_data.status == Some(PaymentStatus::Paid) && update_data.payment_date.is_none() {
        update_data.payment_date = Some(chrono::Utc::now().date_naive());
    }

    let storage = service.get_storage(request);

    match storage.update_fee_payment(fee_id, update_data).await {
        Ok(Some(payment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(payment, "缴费单已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeePaymentNotFound,
            "Fee payment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fee payment update failed: {e}"),
            )),
        ),
    }
}
