use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fees::requests::{
    CreateFeePaymentRequest, FeeListParams, UpdateFeePaymentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FeeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FeeService 实例
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

pub async fn create_fee_payment(
    req: HttpRequest,
    fee_data: web::Json<CreateFeePaymentRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .create_fee_payment(fee_data.into_inner(), &req)
        .await
}

pub async fn get_fee_payment(req: HttpRequest, fee_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.get_fee_payment(fee_id.0, &req).await
}

pub async fn list_fee_payments(
    req: HttpRequest,
    query: web::Query<FeeListParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fee_payments(query.into_inner(), &req).await
}

pub async fn update_fee_payment(
    req: HttpRequest,
    fee_id: SafeIDI64,
    update_data: web::Json<UpdateFeePaymentRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .update_fee_payment(fee_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_fee_payment(req: HttpRequest, fee_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.delete_fee_payment(fee_id.0, &req).await
}

pub async fn list_overdue(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_overdue(&req).await
}

pub async fn fee_statistics(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEE_SERVICE.fee_statistics(&req).await
}

// 配置路由
pub fn configure_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 学生在业务层被限定到自己的账单
                    .route(web::get().to(list_fee_payments))
                    // 开单 - 仅管理员
                    .route(
                        web::post()
                            .to(create_fee_payment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/overdue")
                    .route(web::get().to(list_overdue))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/stats")
                    .route(web::get().to(fee_statistics))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/{id}")
                    // 详情 - 学生只能看自己的账单（业务层校验）
                    .route(web::get().to(get_fee_payment))
                    .route(
                        web::put()
                            .to(update_fee_payment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_fee_payment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
