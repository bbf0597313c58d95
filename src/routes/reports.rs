use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::ReportParams;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn attendance_report(
    req: HttpRequest,
    query: web::Query<ReportParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .attendance_report(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/attendance", web::get().to(attendance_report)),
            ),
    );
}
