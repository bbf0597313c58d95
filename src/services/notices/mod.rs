pub mod delete;
pub mod list;
pub mod post;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notices::requests::{NoticeListParams, PostNoticeRequest};
use crate::storage::Storage;

pub struct NoticeService {
    storage: Option<Arc<dyn Storage>>,
}

impl NoticeService {
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

    // 发布公告
    pub async fn post_notice(
        &self,
        notice_data: PostNoticeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        post::post_notice(self, notice_data, request).await
    }

    // 公告列表
    pub async fn list_notices(
        &self,
        params: NoticeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_notices(self, params, request).await
    }

    // 删除公告
    pub async fn delete_notice(
        &self,
        notice_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notice(self, notice_id, request).await
    }
}
