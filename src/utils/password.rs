//! 密码哈希。Argon2id，成本参数来自配置。

use crate::config::AppConfig;
use crate::errors::SchoolSystemError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

fn hasher() -> Result<Argon2<'static>, SchoolSystemError> {
    let argon2_config = &AppConfig::get().argon2;
    let params = Params::new(
        argon2_config.memory_cost,
        argon2_config.time_cost,
        argon2_config.parallelism,
        None,
    )
    .map_err(|e| SchoolSystemError::validation(format!("Argon2 参数错误: {e}")))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

pub fn hash_password(password: &str) -> Result<String, SchoolSystemError> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SchoolSystemError::validation(format!("密码哈希失败: {e}")))
}

/// 校验失败与哈希格式损坏一律返回 false
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("whatever", "not-a-phc-string"));
    }
}
