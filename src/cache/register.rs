//! 缓存后端注册表。插件在进程加载时自注册，启动流程按名字取构造函数。

use crate::cache::ObjectCache;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    OBJECT_CACHE_REGISTRY
        .write()
        .expect("Cache registry lock poisoned")
        .insert(name.into(), constructor);
}

pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .expect("Cache registry lock poisoned")
        .get(name)
        .cloned()
}

/// 已注册的后端名，仅用于启动日志
pub fn registered_backends() -> Vec<String> {
    OBJECT_CACHE_REGISTRY
        .read()
        .expect("Cache registry lock poisoned")
        .keys()
        .cloned()
        .collect()
}

pub fn debug_object_cache_registry() {
    let backends = registered_backends();
    if backends.is_empty() {
        tracing::debug!("No object cache plugins registered.");
    } else {
        tracing::debug!("Registered object cache plugins: {}", backends.join(", "));
    }
}
