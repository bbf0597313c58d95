use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;
use crate::errors::{Result, SchoolSystemError};

declare_object_cache_plugin!("redis", RedisObjectCache);

/// Redis 缓存后端，多实例部署时共享 token 映射
pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| SchoolSystemError::cache_connection(format!("Redis client: {e}")))?;

        // 启动时 PING 一次，连不上就不启
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                error!("Redis unreachable at {}: {}", redis_config.url, e);
                SchoolSystemError::cache_connection(format!("Redis connection failed: {e}"))
            })?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| SchoolSystemError::cache_connection(format!("Redis ping failed: {e}")))?;

        debug!(
            "Redis cache ready (prefix '{}', ttl {}s)",
            redis_config.key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Redis connection lost: {}", e);
                None
            }
        }
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let Some(mut conn) = self.connection().await else {
            return CacheResult::Error("redis connection unavailable".into());
        };

        match conn.get::<_, Option<String>>(self.prefixed(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Redis GET '{}' failed: {}", key, e);
                CacheResult::Error(e.to_string())
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        let effective_ttl = if ttl == 0 { self.default_ttl } else { ttl };
        if let Err(e) = conn
            .set_ex::<String, String, ()>(self.prefixed(&key), value, effective_ttl)
            .await
        {
            error!("Redis SETEX '{}' failed: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        if let Err(e) = conn.del::<String, i32>(self.prefixed(key)).await {
            error!("Redis DEL '{}' failed: {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        warn!("Redis backend does not support invalidate_all, keys expire by TTL");
    }
}
