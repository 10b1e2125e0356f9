//! # ドメイン層エラー定義
//!
//! 入力検証の失敗を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層でステータスコードに変換可能
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! 現段階のプロダクトは永続化も外部サービス連携も行わないため、
//! NotFound / Conflict のようなエラー種別は存在しない。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 値オブジェクトの生成時に発生する検証失敗を表現する。
/// API 層でこのエラーを受け取り、400 レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値が要求仕様に違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力
    /// - ウォレットアドレスの形式不正
    /// - チケット枚数の範囲外
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}

impl DomainError {
    /// エラーの詳細メッセージを取得する
    ///
    /// API 層がエラーレスポンスの `detail` に使用する。
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(detail) => detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displayがメッセージを含む() {
        let error = DomainError::Validation("チケット枚数が範囲外です".to_string());

        assert_eq!(
            error.to_string(),
            "バリデーションエラー: チケット枚数が範囲外です"
        );
    }

    #[test]
    fn test_detailが元のメッセージを返す() {
        let error = DomainError::Validation("必須です".to_string());

        assert_eq!(error.detail(), "必須です");
    }
}
