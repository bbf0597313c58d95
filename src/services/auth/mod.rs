pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 登录验证
    pub async fn login(
        &self,
        login_request: crate::models::auth::requests::LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 自助注册（建号 + 待审批档案）
    pub async fn register(
        &self,
        register_request: crate::models::auth::requests::RegisterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, register_request, request).await
    }

    // 刷新令牌
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, request).await
    }

    // 验证令牌
    pub async fn verify_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_verify_token(self, request).await
    }

    // 当前用户信息（含角色档案）
    pub async fn get_user(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_get_user(self, request).await
    }

    // 注销
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, request).await
    }
}
