//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// `ADMIN_SECRET_KEY` 未設定時のフォールバック値
///
/// フロントエンドの開発環境設定と揃えてある。フォールバック時は
/// 起動時に警告ログを出力する。本番環境では必ず `ADMIN_SECRET_KEY` を
/// 設定すること。
const DEFAULT_ADMIN_KEY: &str = "your-admin-secret-key";

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// 管理エンドポイントの共有シークレット
    pub admin_key: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .expect("API_PORT が設定されていません")
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
            admin_key: resolve_admin_key(env::var("ADMIN_SECRET_KEY").ok()),
        })
    }
}

/// 管理キーを解決する
///
/// `ADMIN_SECRET_KEY` が未設定の場合はハードコードされたデフォルト値に
/// フォールバックし、警告を出力する。
fn resolve_admin_key(value: Option<String>) -> String {
    match value {
        Some(key) => key,
        None => {
            tracing::warn!("========================================");
            tracing::warn!("⚠️  ADMIN_SECRET_KEY が未設定です！");
            tracing::warn!("   デフォルトの管理キーにフォールバックします");
            tracing::warn!("   本番環境では必ず設定してください");
            tracing::warn!("========================================");
            DEFAULT_ADMIN_KEY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、
    // 解決ロジックを直接検証する

    use super::*;

    #[test]
    fn test_admin_key_設定時はその値を使う() {
        let key = resolve_admin_key(Some("super-secret".to_string()));

        assert_eq!(key, "super-secret");
    }

    #[test]
    fn test_admin_key_未設定時はデフォルトにフォールバックする() {
        let key = resolve_admin_key(None);

        assert_eq!(key, DEFAULT_ADMIN_KEY);
    }
}
