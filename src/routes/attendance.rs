use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceRangeParams, AttendanceViewParams, ClasswiseParams, TakeAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn take_attendance(
    req: HttpRequest,
    take_data: web::Json<TakeAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .take_attendance(take_data.into_inner(), &req)
        .await
}

pub async fn view_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceViewParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .view_attendance(query.into_inner(), &req)
        .await
}

pub async fn attendance_statistics(
    req: HttpRequest,
    query: web::Query<AttendanceRangeParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .attendance_statistics(query.into_inner(), &req)
        .await
}

pub async fn classwise_statistics(
    req: HttpRequest,
    query: web::Query<ClasswiseParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .classwise_statistics(query.into_inner(), &req)
        .await
}

pub async fn export_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceViewParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .export_attendance(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 点名 - 教务角色
                    .route(
                        web::post()
                            .to(take_attendance)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::get()
                            .to(view_attendance)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/stats")
                    .route(web::get().to(attendance_statistics))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            // 全校分布 - 仅管理员
            .service(
                web::resource("/stats/classwise")
                    .route(web::get().to(classwise_statistics))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/export")
                    .route(web::get().to(export_attendance))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            ),
    );
}
