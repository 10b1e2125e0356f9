//! # チケット購入の値オブジェクト
//!
//! チケット購入リクエストの各フィールドを検証付きで表現する。

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 1 回の購入で指定できる最小チケット枚数
pub const MIN_TICKETS_PER_PURCHASE: i64 = 1;

/// 1 回の購入で指定できる最大チケット枚数
pub const MAX_TICKETS_PER_PURCHASE: i64 = 100;

/// チケット枚数（値オブジェクト）
///
/// 1 回の購入リクエストで指定するチケット枚数。
///
/// # 不変条件
///
/// - [`MIN_TICKETS_PER_PURCHASE`] 以上 [`MAX_TICKETS_PER_PURCHASE`] 以下
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use chainraffle_domain::ticket::TicketCount;
///
/// let count = TicketCount::new(5)?;
/// assert_eq!(count.as_i64(), 5);
///
/// assert!(TicketCount::new(0).is_err());
/// assert!(TicketCount::new(101).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TicketCount(i64);

impl TicketCount {
    /// 指定した値からチケット枚数を作成する
    ///
    /// # エラー
    ///
    /// 範囲外の場合は `DomainError::Validation` を返す。
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(MIN_TICKETS_PER_PURCHASE..=MAX_TICKETS_PER_PURCHASE).contains(&value) {
            return Err(DomainError::Validation(format!(
                "チケット枚数は {MIN_TICKETS_PER_PURCHASE} 〜 {MAX_TICKETS_PER_PURCHASE} の範囲で指定してください"
            )));
        }
        Ok(Self(value))
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for TicketCount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for TicketCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

define_validated_string! {
    /// トランザクションハッシュ（値オブジェクト）
    ///
    /// 購入者が送信したオンチェーントランザクションのハッシュ。
    /// 現段階ではオンチェーン検証を行わないため、存在チェックのみを行う。
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 128 文字
    pub struct TransactionHash {
        label: "トランザクションハッシュ",
        max_length: 128,
    }
}

define_validated_string! {
    /// ネットワーク識別子（値オブジェクト）
    ///
    /// 購入が行われたチェーンの識別子（例: `"sepolia"`, `"mainnet"`）。
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 50 文字
    pub struct NetworkName {
        label: "ネットワーク",
        max_length: 50,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // ===== TicketCount テスト =====

    #[rstest]
    #[case::min(1)]
    #[case::max(100)]
    #[case::mid(42)]
    fn test_範囲内のチケット枚数を受理する(#[case] value: i64) {
        let count = TicketCount::new(value).unwrap();

        assert_eq!(count.as_i64(), value);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::over_max(101)]
    #[case::negative(-1)]
    fn test_範囲外のチケット枚数を拒否する(#[case] value: i64) {
        let result = TicketCount::new(value);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_try_fromがnewに委譲する() {
        assert!(TicketCount::try_from(50).is_ok());
        assert!(TicketCount::try_from(0).is_err());
    }

    // ===== TransactionHash テスト =====

    #[test]
    fn test_トランザクションハッシュを受理する() {
        let hash = TransactionHash::new(
            "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
        )
        .unwrap();

        assert_eq!(
            hash.as_str(),
            "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b"
        );
    }

    #[test]
    fn test_空のトランザクションハッシュを拒否する() {
        assert!(TransactionHash::new("").is_err());
        assert!(TransactionHash::new("   ").is_err());
    }

    #[test]
    fn test_長すぎるトランザクションハッシュを拒否する() {
        let result = TransactionHash::new("a".repeat(129));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    // ===== NetworkName テスト =====

    #[test]
    fn test_ネットワーク名を受理しtrimする() {
        let network = NetworkName::new("  sepolia  ").unwrap();

        assert_eq!(network.as_str(), "sepolia");
    }

    #[test]
    fn test_空のネットワーク名を拒否する() {
        assert!(NetworkName::new("").is_err());
    }
}
