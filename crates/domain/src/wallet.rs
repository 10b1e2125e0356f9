//! # ウォレットアドレス
//!
//! チケット購入者の EVM アカウントアドレスを表現する値オブジェクト。

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// アドレスの全体長（`0x` プレフィックス + 16 進数 40 桁）
const ADDRESS_LENGTH: usize = 42;

/// ウォレットアドレス（値オブジェクト)
///
/// EVM 系チェーンのアカウントアドレス。構文検証のみを行い、
/// EIP-55 チェックサムの検証は行わない（大文字小文字は区別しない）。
///
/// # 不変条件
///
/// - `0x` プレフィックスで始まる
/// - プレフィックスの後に 16 進数がちょうど 40 桁続く
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use chainraffle_domain::wallet::WalletAddress;
///
/// let address = WalletAddress::new("0x742d35Cc6634C0532925a3b844Bc454e4438f44e")?;
/// assert_eq!(address.as_str(), "0x742d35Cc6634C0532925a3b844Bc454e4438f44e");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// 指定した文字列からウォレットアドレスを作成する
    ///
    /// 入力は trim され、大文字小文字はそのまま保持される
    /// （レスポンスでのエコーバックのため）。
    ///
    /// # エラー
    ///
    /// 構文が不正な場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if !Self::is_well_formed(&value) {
            return Err(DomainError::Validation(
                "ウォレットアドレスの形式が不正です".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// アドレスが構文的に正しいかを判定する
    fn is_well_formed(value: &str) -> bool {
        value.len() == ADDRESS_LENGTH
            && value.starts_with("0x")
            && value[2..].bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_正しいアドレスを受理する() {
        let address = WalletAddress::new("0x742d35Cc6634C0532925a3b844Bc454e4438f44e").unwrap();

        assert_eq!(
            address.as_str(),
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e"
        );
    }

    #[test]
    fn test_前後の空白をtrimする() {
        let address =
            WalletAddress::new("  0x742d35cc6634c0532925a3b844bc454e4438f44e  ").unwrap();

        assert_eq!(
            address.as_str(),
            "0x742d35cc6634c0532925a3b844bc454e4438f44e"
        );
    }

    #[test]
    fn test_大文字小文字は区別しない() {
        // チェックサム検証は行わないため、全小文字・全大文字・混在すべて受理する
        assert!(WalletAddress::new("0x742d35cc6634c0532925a3b844bc454e4438f44e").is_ok());
        assert!(WalletAddress::new("0x742D35CC6634C0532925A3B844BC454E4438F44E").is_ok());
    }

    #[rstest]
    #[case::too_short("0x123")]
    #[case::empty("")]
    #[case::no_prefix("742d35cc6634c0532925a3b844bc454e4438f44e42")]
    #[case::non_hex("0x742d35cc6634c0532925a3b844bc454e4438f44g")]
    #[case::too_long("0x742d35cc6634c0532925a3b844bc454e4438f44e00")]
    fn test_不正なアドレスを拒否する(#[case] input: &str) {
        let result = WalletAddress::new(input);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_serializeで平文文字列になる() {
        let address = WalletAddress::new("0x742d35cc6634c0532925a3b844bc454e4438f44e").unwrap();
        let json = serde_json::to_value(&address).unwrap();

        assert_eq!(
            json,
            serde_json::json!("0x742d35cc6634c0532925a3b844bc454e4438f44e")
        );
    }
}
