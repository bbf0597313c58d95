pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::events::requests::{CreateEventRequest, EventListParams, UpdateEventRequest};
use crate::storage::Storage;

pub struct EventService {
    storage: Option<Arc<dyn Storage>>,
}

impl EventService {
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

    // 创建事件
    pub async fn create_event(
        &self,
        event_data: CreateEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_event(self, event_data, request).await
    }

    // 事件详情
    pub async fn get_event(
        &self,
        event_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_event(self, event_id, request).await
    }

    // 事件列表
    pub async fn list_events(
        &self,
        params: EventListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_events(self, params, request).await
    }

    // 更新事件
    pub async fn update_event(
        &self,
        event_id: i64,
        update_data: UpdateEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_event(self, event_id, update_data, request).await
    }

    // 删除事件
    pub async fn delete_event(
        &self,
        event_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_event(self, event_id, request).await
    }
}
