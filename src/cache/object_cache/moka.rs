use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;
use crate::errors::Result;

declare_object_cache_plugin!("moka", MokaObjectCache);

/// 进程内缓存后端，单实例部署的默认选择
pub struct MokaObjectCache {
    inner: Cache<String, String>,
}

impl MokaObjectCache {
    pub async fn new_async() -> Result<Self> {
        let cache_config = &AppConfig::get().cache;
        let inner = Cache::builder()
            .max_capacity(cache_config.memory.max_capacity)
            .time_to_live(std::time::Duration::from_secs(cache_config.default_ttl))
            .build();

        debug!(
            "Moka cache ready (capacity {}, ttl {}s)",
            cache_config.memory.max_capacity, cache_config.default_ttl
        );
        Ok(Self { inner })
    }
}

#[async_trait]
impl ObjectCache for MokaObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => CacheResult::NotFound,
        }
    }

    // TTL 在构建时全局设定，per-item ttl 参数对 Moka 不生效
    async fn insert_raw(&self, key: String, value: String, _ttl: u64) {
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
