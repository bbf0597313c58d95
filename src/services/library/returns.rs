use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LibraryService;
use crate::models::library::requests::ReturnBookRequest;
use crate::models::library::responses::ReturnBookResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::grading::late_fine;

pub async fn return_book(
    service: &LibraryService,
    loan_id: i64,
    return_data: ReturnBookRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let loan = match storage.get_loan_by_id(loan_id).await {
        Ok(Some(loan)) => loan,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LoanNotFound,
                "Loan not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get loan: {e}"),
                )),
            );
        }
    };

    if loan.is_returned {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::LoanAlreadyReturned,
            "Loan has already been returned",
        )));
    }

    let return_date = return_data
        .return_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    if return_date < loan.borrow_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Return date cannot be before the borrow date",
        )));
    }

    // 罚金在归还时结算
    let fine_per_day = service.get_config().school.fine_per_day;
    let fine_amount = late_fine(loan.due_date, return_date, fine_per_day);

    match storage.complete_loan(loan_id, return_date, fine_amount).await {
        Ok(Some(loan)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReturnBookResponse { loan, fine_amount },
            "还书完成",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LoanNotFound,
            "Loan not found",
        ))),
        Err(e) => {
            error!("还书失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to return book: {e}"),
                )),
            )
        }
    }
}
