//! JWT 认证中间件。
//!
//! 校验 `Authorization: Bearer <token>`，把完整的 [`entities::User`]
//! 放进请求扩展，后续处理器用 [`RequireJWT::extract_user`] 取出。
//! token → 用户的解析结果带 TTL 缓存，命中时不回源数据库。

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::{ErrorCode, users::entities};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct RequireJWT;

fn bearer_token(req: &ServiceRequest) -> Result<&str, String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())
}

fn cache_key(token: &str) -> String {
    format!("user:{token}")
}

/// 缓存未命中或反序列化失败时返回 None，反序列化失败顺手清掉脏条目
async fn cached_user(cache: &Arc<dyn ObjectCache>, token: &str) -> Option<entities::User> {
    let key = cache_key(token);
    match cache.get_raw(&key).await {
        CacheResult::Found(json) => match serde_json::from_str::<entities::User>(&json) {
            Ok(user) => Some(user),
            Err(_) => {
                cache.remove(&key).await;
                info!("Dropped undeserializable cache entry for token: {}", token);
                None
            }
        },
        _ => None,
    }
}

async fn authenticate(req: &ServiceRequest) -> Result<entities::User, String> {
    let token = bearer_token(req)?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    if let Some(user) = cached_user(&cache, token).await {
        return Ok(user);
    }

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let user_id = claims
        .user_id()
        .map_err(|_| "Invalid user ID in JWT".to_string())?;

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| "User not found".to_string())?;

    if user.status != entities::UserStatus::Active {
        return Err("User is not active".to_string());
    }

    if let Ok(user_json) = serde_json::to_string(&user) {
        cache
            .insert_raw(
                cache_key(token),
                user_json,
                AppConfig::get().cache.default_ttl,
            )
            .await;
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // CORS 预检放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Unauthorized, "")
                        .map_into_right_body(),
                ));
            }

            match authenticate(&req).await {
                Ok(user) => {
                    debug!("JWT auth ok, user {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!("JWT auth rejected on {}: {}", req.path(), err);
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 从请求扩展中取出已认证的用户，只能在该中间件之后调用
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<entities::User> {
        req.extensions().get::<entities::User>().cloned()
    }

    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<entities::User>().map(|user| user.id)
    }

    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions()
            .get::<entities::User>()
            .map(|user| user.role.clone())
    }
}
