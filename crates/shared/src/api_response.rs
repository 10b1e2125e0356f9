//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式 `{ "success": true, "message"?, "data": T }`
//! を提供する。

use serde::{Deserialize, Serialize};

/// 公開 API の統一レスポンス型
///
/// すべての公開 API エンドポイントは成功時に
/// `{ "success": true, "data": T }` 形式でレスポンスを返す。
/// 状態変更系の操作では `message` に人間可読な結果メッセージを含め、
/// 参照系（設定スナップショット取得など）では `message` を省略する。
///
/// ## 使用例
///
/// ```
/// use chainraffle_shared::ApiResponse;
///
/// let response = ApiResponse::with_message("受け付けました", "payload");
/// assert!(response.success);
/// assert_eq!(response.data, "payload");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// メッセージなしの成功レスポンスを作成する
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// メッセージ付きの成功レスポンスを作成する
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_でmessageが省略される() {
        let response = ApiResponse::new("hello");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "success": true, "data": "hello" }));
        // skip_serializing_if により message キー自体が存在しない
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_with_message_でmessageが含まれる() {
        let response = ApiResponse::with_message("完了しました", 42);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "完了しました",
                "data": 42
            })
        );
    }

    #[test]
    fn test_deserializeでjsonからオブジェクトに変換する() {
        let json = r#"{"success": true, "data": "world"}"#;
        let response: ApiResponse<String> = serde_json::from_str(json).unwrap();

        assert!(response.success);
        assert_eq!(response.message, None);
        assert_eq!(response.data, "world");
    }

    #[test]
    fn test_serialize_deserializeのラウンドトリップ() {
        let original = ApiResponse::with_message("ok", vec![1, 2, 3]);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: ApiResponse<Vec<i32>> = serde_json::from_str(&json).unwrap();

        assert_eq!(original, deserialized);
    }
}

#[cfg(all(test, feature = "openapi"))]
mod openapi_tests {
    use utoipa::PartialSchema;

    use super::*;

    #[test]
    fn test_api_response_stringにtoschemaが実装されている() {
        let schema = ApiResponse::<String>::schema();
        let utoipa::openapi::RefOr::T(schema) = schema else {
            panic!("expected inline schema, got ref");
        };
        let utoipa::openapi::Schema::Object(obj) = schema else {
            panic!("expected object schema");
        };
        assert!(obj.properties.contains_key("success"));
        assert!(obj.properties.contains_key("data"));
    }
}
