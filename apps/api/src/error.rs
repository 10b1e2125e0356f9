//! # API エラーハンドリング
//!
//! エラーレスポンスの定義と、axum レスポンスへの変換ヘルパー。
//!
//! エラー分類は 3 種類のみ:
//! 401（管理キー不一致）、400（検証失敗）、500（予期しない内部エラー）。
//! これに加えて、許可されていないメソッドには 405、
//! 未知のパスには 404 を返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chainraffle_domain::DomainError;
use chainraffle_shared::ErrorResponse;

/// 401 Unauthorized レスポンス（管理キー不一致）
pub fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::unauthorized("管理キーが一致しません")),
    )
        .into_response()
}

/// 400 バリデーションエラーレスポンス
pub fn validation_error_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation_error(detail)),
    )
        .into_response()
}

/// ドメインエラーを 400 レスポンスに変換する
pub fn domain_error_response(error: &DomainError) -> Response {
    validation_error_response(error.detail())
}

/// 405 Method Not Allowed レスポンス
pub fn method_not_allowed_response(detail: &str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::method_not_allowed(detail)),
    )
        .into_response()
}

/// 未知のパスに対するフォールバックハンドラ（404）
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("リクエストされたパスは存在しません")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn response_status_and_body(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error)
    }

    #[tokio::test]
    async fn test_unauthorized_responseが401を返す() {
        let (status, body) = response_status_and_body(unauthorized_response()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.error_type.ends_with("/unauthorized"));
        assert_eq!(body.detail, "管理キーが一致しません");
    }

    #[tokio::test]
    async fn test_validation_error_responseが400を返す() {
        let (status, body) =
            response_status_and_body(validation_error_response("入力が不正です")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error_type.ends_with("/validation-error"));
        assert_eq!(body.detail, "入力が不正です");
    }

    #[tokio::test]
    async fn test_domain_error_responseがdetailを引き継ぐ() {
        let error = DomainError::Validation("チケット枚数が範囲外です".to_string());
        let (status, body) = response_status_and_body(domain_error_response(&error)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "チケット枚数が範囲外です");
    }

    #[tokio::test]
    async fn test_method_not_allowed_responseが405を返す() {
        let (status, body) =
            response_status_and_body(method_not_allowed_response("GET は使用できません")).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(body.error_type.ends_with("/method-not-allowed"));
    }

    #[tokio::test]
    async fn test_not_foundが404を返す() {
        let (status, body) = response_status_and_body(not_found().await).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.error_type.ends_with("/not-found"));
    }
}
