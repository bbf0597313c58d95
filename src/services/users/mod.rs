pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListParams};
use crate::storage::Storage;

/// 账号管理门面，仅管理员路由使用
pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 账号列表（分页 + 过滤）
    pub async fn list_users(
        &self,
        params: UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, params, request).await
    }

    // 管理员直接开号，档案走各自的 profile 接口
    pub async fn create_user(
        &self,
        payload: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, payload, request).await
    }

    pub async fn get_user(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_user(self, user_id, request).await
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        payload: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, user_id, payload, request).await
    }

    pub async fn delete_user(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, user_id, request).await
    }
}
