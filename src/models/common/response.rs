use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 中间件与参数解析层使用的错误代码
///
/// 业务操作本身不使用此信封：读操作返回裸 JSON 数组，
/// 写操作返回 `{"success": bool}`（见 WriteResult）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    Unauthorized = 40100,
    AccessDenied = 40300,
    NotFound = 40400,
    InternalServerError = 50000,
}

// 统一的中间件错误响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// 写操作的统一响应体：`{"success": true/false}`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct WriteResult {
    pub success: bool,
}

impl WriteResult {
    pub fn ok() -> Self {
        Self { success: true }
    }

    pub fn fail() -> Self {
        Self { success: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_result_serializes_to_success_flag() {
        let json = serde_json::to_value(WriteResult::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
        let json = serde_json::to_value(WriteResult::fail()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false }));
    }

    #[test]
    fn test_api_response_skips_empty_data() {
        let resp = ApiResponse::error_empty(ErrorCode::Unauthorized, "no token");
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["code"], ErrorCode::Unauthorized as i32);
    }
}
