use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::notifications::requests::{NotificationListParams, SendNotificationRequest};
use crate::models::users::entities::UserRole;
use crate::services::NotificationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

pub async fn send_notification(
    req: HttpRequest,
    send_data: web::Json<SendNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .send_notification(send_data.into_inner(), &req)
        .await
}

pub async fn list_notifications(
    req: HttpRequest,
    query: web::Query<NotificationListParams>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .list_notifications(query.into_inner(), &req)
        .await
}

pub async fn unread_count(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.unread_count(&req).await
}

pub async fn mark_read(req: HttpRequest, notification_id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.mark_read(notification_id.0, &req).await
}

pub async fn mark_all_read(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.mark_all_read(&req).await
}

pub async fn delete_notification(
    req: HttpRequest,
    notification_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .delete_notification(notification_id.0, &req)
        .await
}

// 配置路由
pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 收件箱 - 业务层固定为当前用户
                    .route(web::get().to(list_notifications))
                    // 手工下发 - 仅管理员
                    .route(
                        web::post()
                            .to(send_notification)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(web::resource("/unread-count").route(web::get().to(unread_count)))
            .service(web::resource("/read-all").route(web::post().to(mark_all_read)))
            .service(
                web::resource("/{id}")
                    .route(web::delete().to(delete_notification)),
            )
            .service(web::resource("/{id}/read").route(web::post().to(mark_read))),
    );
}
