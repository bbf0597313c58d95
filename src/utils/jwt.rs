//! JWT 签发与校验。
//!
//! 双 token 模型：短效 access token 走 Authorization 头，
//! 长效 refresh token 放 HttpOnly Cookie。

use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

const REFRESH_COOKIE: &str = "refresh_token";

/// token 用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // 用户 ID
    pub role: String,       // 用户角色
    pub token_type: String, // "access" 或 "refresh"
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    /// sub 解析回用户 ID
    pub fn user_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| ErrorKind::InvalidToken.into())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn issue(
        user_id: i64,
        role: &str,
        kind: TokenKind,
        ttl: chrono::Duration,
    ) -> Result<String, JwtError> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: kind.as_str().to_string(),
            exp: (now + ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let key = EncodingKey::from_secret(AppConfig::get().jwt.secret.as_ref());
        encode(&Header::default(), &claims, &key)
    }

    pub fn generate_access_token(user_id: i64, role: &str) -> Result<String, JwtError> {
        let minutes = AppConfig::get().jwt.access_token_expiry;
        Self::issue(
            user_id,
            role,
            TokenKind::Access,
            chrono::Duration::minutes(minutes),
        )
    }

    /// 签发 access + refresh 对。remember_me 场景下可传自定义 refresh 有效期。
    pub fn generate_token_pair(
        user_id: i64,
        role: &str,
        refresh_ttl: Option<chrono::Duration>,
    ) -> Result<TokenPair, JwtError> {
        let ttl = refresh_ttl
            .unwrap_or_else(|| chrono::Duration::days(AppConfig::get().jwt.refresh_token_expiry));

        Ok(TokenPair {
            access_token: Self::generate_access_token(user_id, role)?,
            refresh_token: Self::issue(user_id, role, TokenKind::Refresh, ttl)?,
        })
    }

    /// 校验签名与过期时间，不限定 token 用途
    pub fn verify_token(token: &str) -> Result<Claims, JwtError> {
        let key = DecodingKey::from_secret(AppConfig::get().jwt.secret.as_ref());
        decode::<Claims>(token, &key, &Validation::default()).map(|data| data.claims)
    }

    fn verify_kind(token: &str, kind: TokenKind) -> Result<Claims, JwtError> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != kind.as_str() {
            return Err(ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, JwtError> {
        Self::verify_kind(token, TokenKind::Access)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, JwtError> {
        Self::verify_kind(token, TokenKind::Refresh)
    }

    /// 用 refresh token 换新的 access token
    pub fn refresh_access_token(refresh_token: &str) -> Result<String, JwtError> {
        let claims = Self::verify_refresh_token(refresh_token)?;
        Self::generate_access_token(claims.user_id()?, &claims.role)
    }

    pub fn create_refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(REFRESH_COOKIE, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                config.jwt.refresh_token_expiry,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 注销时下发的立即过期 Cookie
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE, "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }
}
