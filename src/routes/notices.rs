use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::notices::requests::{NoticeListParams, PostNoticeRequest};
use crate::models::users::entities::UserRole;
use crate::services::NoticeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 NoticeService 实例
static NOTICE_SERVICE: Lazy<NoticeService> = Lazy::new(NoticeService::new_lazy);

pub async fn post_notice(
    req: HttpRequest,
    notice_data: web::Json<PostNoticeRequest>,
) -> ActixResult<HttpResponse> {
    NOTICE_SERVICE.post_notice(notice_data.into_inner(), &req).await
}

pub async fn list_notices(
    req: HttpRequest,
    query: web::Query<NoticeListParams>,
) -> ActixResult<HttpResponse> {
    NOTICE_SERVICE.list_notices(query.into_inner(), &req).await
}

pub async fn delete_notice(req: HttpRequest, notice_id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTICE_SERVICE.delete_notice(notice_id.0, &req).await
}

// 配置路由
pub fn configure_notice_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notices")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 所有登录用户可查
                    .route(web::get().to(list_notices))
                    .route(
                        web::post()
                            .to(post_notice)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 删除 - 管理员任意，教师限本人发布（业务层校验）
                    .route(
                        web::delete()
                            .to(delete_notice)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
