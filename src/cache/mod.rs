//! 对象缓存层
//!
//! 通过注册表以插件方式提供 Moka（内存）和 Redis 两种后端，
//! JWT 中间件用它缓存 token → 用户 的映射。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    Error(String),
}

/// 字符串对象缓存抽象
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明并注册一个缓存插件
///
/// 在程序加载时（ctor）把构造函数塞进注册表，
/// 启动流程再按配置项选择后端。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $wrapper:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $wrapper:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = $wrapper::new_async().await?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
