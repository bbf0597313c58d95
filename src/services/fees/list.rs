use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::fees::requests::{FeeListParams, FeeListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_fee_payments(
    service: &FeeService,
    params: FeeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut student_profile_id = params.student_profile_id;

    // 学生只能看自己的账单，过滤参数强制为本人档案
    if let Some(user) = RequireJWT::extract_user(request)
        && user.role == UserRole::Student
    {
        match storage.get_student_by_user_id(user.id).await {
            Ok(Some(detail)) => student_profile_id = Some(detail.profile.id),
            Ok(None) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "No student profile for current user",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to resolve student profile: {e}"),
                    )),
                );
            }
        }
    }

    let query = FeeListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_profile_id,
        status: params.status,
    };

    match storage.list_fee_payments(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "缴费单列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list fee payments: {e}"),
            )),
        ),
    }
}
