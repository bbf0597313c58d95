//! 基于角色的访问控制中间件。
//!
//! 必须套在 `RequireJWT` 之内：角色从请求扩展里的已认证用户读取。
//! 每个用户只有一个角色，因此检查就是"当前角色是否在允许集合内"。
//!
//! ```rust,ignore
//! web::scope("/api/v1/users")
//!     .wrap(RequireJWT)
//!     .wrap(RequireRole::new_any(UserRole::admin_roles()))
//! ```

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    users::entities::{self, UserRole},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    allowed: Vec<UserRole>,
}

impl RequireRole {
    /// 只允许单一角色
    pub fn new(role: &UserRole) -> Self {
        Self {
            allowed: vec![role.clone()],
        }
    }

    /// 允许集合内任一角色
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed: roles.iter().map(|r| (*r).clone()).collect(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed: self.allowed.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed: Vec<UserRole>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let allowed = self.allowed.clone();

        Box::pin(async move {
            let Some(user) = req.extensions().get::<entities::User>().cloned() else {
                info!(
                    "Role check failed: no authenticated user in request extensions, \
                     RequireJWT must run first"
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            if allowed.contains(&user.role) {
                let res = srv.call(req).await?.map_into_left_body();
                Ok(res)
            } else {
                info!(
                    "Access denied for user {} (role: {:?}), allowed roles: {:?}",
                    user.id, user.role, allowed
                );
                Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::Forbidden,
                        "Access denied.",
                    )
                    .map_into_right_body(),
                ))
            }
        })
    }
}
