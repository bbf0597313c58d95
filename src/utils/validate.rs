//! 输入校验规则。账号类规则全局统一，班级/学号规则服务于档案与考勤。

use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static CLASS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 _-]+$").expect("Invalid class name regex"));

/// 用户名：5-16 位，字母/数字/下划线/连字符
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if !(5..=16).contains(&username.len()) {
        return Err("Username length must be between 5 and 16 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 班级名：1-32 位，字母/数字/空格/下划线/连字符
pub fn validate_class_name(class_name: &str) -> Result<(), &'static str> {
    if class_name.is_empty() || class_name.len() > 32 {
        return Err("Class name length must be between 1 and 32 characters");
    }
    if !CLASS_NAME_RE.is_match(class_name) {
        return Err("Class name must contain only letters, numbers, spaces, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_roll_number(roll_number: i32) -> Result<(), &'static str> {
    if roll_number <= 0 {
        return Err("Roll number must be positive");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

const WEAK_PASSWORDS: &[&str] = &[
    "password",
    "12345678",
    "123456789",
    "qwerty123",
    "admin123",
    "password1",
    "Password1",
    "Qwerty123",
    "Abcd1234",
];

/// 密码策略：至少 8 位，且同时包含大写字母、小写字母和数字；
/// 拒绝常见弱密码。违反的规则全部列出，不在第一条就短路。
pub fn validate_password(password: &str) -> PasswordValidationResult {
    type Rule = (fn(&str) -> bool, &'static str);

    const RULES: &[Rule] = &[
        (
            |p| p.len() >= 8,
            "Password must be at least 8 characters long",
        ),
        (
            |p| p.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            |p| p.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            |p| p.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one digit",
        ),
        (
            |p| !WEAK_PASSWORDS.iter().any(|w| p.eq_ignore_ascii_case(w)),
            "Password is too common, please choose a stronger password",
        ),
    ];

    let errors: Vec<&'static str> = RULES
        .iter()
        .filter(|(check, _)| !check(password))
        .map(|(_, msg)| *msg)
        .collect();

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 批量导入用的宽松密码规则：只要求长度，完整策略由首次改密时执行
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_multiple_violations_all_reported() {
        let result = validate_password("abc");
        assert!(result.errors.len() >= 3);
    }

    #[test]
    fn test_class_name() {
        assert!(validate_class_name("five").is_ok());
        assert!(validate_class_name("Grade 10-B").is_ok());
        assert!(validate_class_name("").is_err());
        assert!(validate_class_name("class@home").is_err());
    }

    #[test]
    fn test_roll_number() {
        assert!(validate_roll_number(1).is_ok());
        assert!(validate_roll_number(0).is_err());
        assert!(validate_roll_number(-3).is_err());
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("teacher_01").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad name!").is_err());
    }
}
