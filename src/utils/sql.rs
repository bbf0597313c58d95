/// 转义 LIKE 模式中的通配符
///
/// 用户输入进入模糊搜索前必须经过这里，避免 `%`/`_` 被当作通配符。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_like_pattern("alice"), "alice");
    }

    #[test]
    fn test_escape_wildcards() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}
