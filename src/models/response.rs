//! 通用 API 响应模型
//!
//! 定义统一的 API 响应格式

use serde::{Deserialize, Serialize};

use crate::common::get_beijing_time;

/// 统一 API 响应结构
///
/// 所有接口返回统一格式，包含：
/// - success: 请求是否成功
/// - data: 响应数据（成功时有值）
/// - message: 响应消息
/// - timestamp: 响应时间戳（北京时间）
/// - code: 错误码（仅失败时存在）
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 请求是否成功
    pub success: bool,
    /// 响应数据
    pub data: Option<T>,
    /// 响应消息
    pub message: String,
    /// 响应时间戳（ISO 8601 格式）
    pub timestamp: String,
    /// 机器可读的错误码，如 BOND_COLLECTION_NOT_FOUND
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    ///
    /// # 参数
    /// - data: 响应数据
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            timestamp: get_beijing_time(),
            code: None,
        }
    }

    /// 创建带自定义消息的成功响应
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::success(data)
        }
    }

    /// 创建错误响应
    ///
    /// # 参数
    /// - message: 错误信息
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message,
            timestamp: get_beijing_time(),
            code: None,
        }
    }

    /// 创建带错误码的错误响应
    pub fn error_with_code(message: String, code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::error(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_code() {
        let resp = ApiResponse::<()>::error_with_code("集合不存在".to_string(), "BOND_COLLECTION_NOT_FOUND");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "BOND_COLLECTION_NOT_FOUND");
        assert!(json["data"].is_null());
    }

    #[test]
    fn success_envelope_omits_code() {
        let resp = ApiResponse::success(42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["data"], 42);
        assert!(json.get("code").is_none());
        assert!(json["timestamp"].as_str().unwrap().ends_with("+08:00"));
    }
}
