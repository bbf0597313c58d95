pub mod delete;
pub mod dispatch;
pub mod list;
pub mod read;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::{NotificationListParams, SendNotificationRequest};
use crate::services::websocket::RealtimeHub;
use crate::storage::Storage;

pub use dispatch::dispatch;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .map(|data| data.get_ref().clone())
                .expect("Storage not found in app data"),
        }
    }

    /// 实时中枢按需取用：测试场景下可以不挂载
    pub(crate) fn get_hub(&self, request: &HttpRequest) -> Option<Arc<RealtimeHub>> {
        request
            .app_data::<actix_web::web::Data<RealtimeHub>>()
            .map(|data| data.clone().into_inner())
    }

    // 手工下发通知（管理员）
    pub async fn send_notification(
        &self,
        send_data: SendNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_notification(self, send_data, request).await
    }

    // 当前用户的通知列表
    pub async fn list_notifications(
        &self,
        params: NotificationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, params, request).await
    }

    // 未读数
    pub async fn unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::unread_count(self, request).await
    }

    // 标记单条已读
    pub async fn mark_read(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        read::mark_read(self, notification_id, request).await
    }

    // 全部标记已读
    pub async fn mark_all_read(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        read::mark_all_read(self, request).await
    }

    // 删除通知（仅收件人）
    pub async fn delete_notification(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notification(self, notification_id, request).await
    }
}
