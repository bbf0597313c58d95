use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    fn envelope(code: ErrorCode, data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::envelope(ErrorCode::Success, Some(data), message)
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self::envelope(code, Some(data), message)
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::envelope(ErrorCode::Success, None, message)
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::envelope(code, None, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(42, "ok");
        assert_eq!(resp.code, ErrorCode::Success as i32);
        assert_eq!(resp.data, Some(42));
    }

    #[test]
    fn test_error_empty_skips_data() {
        let resp = ApiResponse::<()>::error_empty(ErrorCode::NotFound, "missing");
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["code"], 404);
    }
}
