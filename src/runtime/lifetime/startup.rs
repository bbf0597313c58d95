use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UserListQuery};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建缓存实例：先试配置的后端，失败则回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let configured = AppConfig::get().cache.cache_type.as_str();

    let mut candidates = vec![configured];
    if configured != "moka" {
        candidates.push("moka");
    }

    for backend in &candidates {
        let Some(constructor) = get_object_cache_plugin(backend) else {
            warn!("Cache backend '{}' not found in registry", backend);
            continue;
        };
        match constructor().await {
            Ok(cache) => {
                warn!("Cache backend '{}' initialized", backend);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Failed to create '{}' cache: {}", backend, e);
            }
        }
    }

    Err(format!("No cache backend available (tried: {candidates:?})").into())
}

fn random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// ADMIN_PASSWORD 环境变量优先；未设置时生成随机密码并打到日志里
fn admin_password() -> String {
    std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = random_password(16);
        warn!("ADMIN_PASSWORD not set, generated admin password: {}", pwd);
        warn!("Save it now or set ADMIN_PASSWORD before the next start");
        pwd
    })
}

/// 空库首启时建一个 admin 账号，否则什么都不做
async fn seed_admin(storage: &Arc<dyn Storage>) {
    let probe = UserListQuery {
        page: Some(1),
        size: Some(1),
        role: None,
        status: None,
        search: None,
    };
    match storage.list_users_with_pagination(probe).await {
        Ok(response) if response.pagination.total > 0 => {
            debug!(
                "{} user(s) already present, admin seed skipped",
                response.pagination.total
            );
            return;
        }
        Ok(_) => info!("Empty user table, seeding default admin account"),
        Err(e) => {
            warn!("User count probe failed ({}), admin seed skipped", e);
            return;
        }
    }

    let password_hash = match hash_password(&admin_password()) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Admin password hashing failed ({}), seed skipped", e);
            return;
        }
    };

    let seed_request = CreateUserRequest {
        username: "admin".to_string(),
        email: "admin@localhost".to_string(),
        password: password_hash,
        role: UserRole::Admin,
        full_name: "Administrator".to_string(),
        mobile: None,
    };

    match storage.create_user(seed_request).await {
        Ok(user) => info!("Default admin account seeded (ID: {})", user.id),
        Err(e) => warn!("Admin account seed failed: {}", e),
    }
}

/// 启动前置：存储（含迁移）、管理员种子、缓存
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend ready, migrations applied");

    seed_admin(&storage).await;

    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Cache backend ready");

    StartupContext { storage, cache }
}
