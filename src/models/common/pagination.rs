use serde::{Deserialize, Serialize};

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

// 查询串里的分页参数可能是数字也可能是带引号的字符串，两种都接受
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Text(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Text(s) => s.parse().map_err(|_| {
            serde::de::Error::custom(format!("invalid integer in pagination parameter: '{s}'"))
        }),
    }
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

impl PaginationInfo {
    /// 由总数与查询参数构造分页信息
    pub fn from_query(query: &PaginationQuery, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + query.size - 1) / query.size
        };
        Self {
            page: query.page,
            page_size: query.size,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_info_rounding() {
        let q = PaginationQuery { page: 1, size: 10 };
        assert_eq!(PaginationInfo::from_query(&q, 0).total_pages, 0);
        assert_eq!(PaginationInfo::from_query(&q, 10).total_pages, 1);
        assert_eq!(PaginationInfo::from_query(&q, 11).total_pages, 2);
    }

    #[test]
    fn test_string_page_parses() {
        let q: PaginationQuery = serde_json::from_str(r#"{"page":"3","size":20}"#).unwrap();
        assert_eq!(q.page, 3);
        assert_eq!(q.size, 20);
    }
}
