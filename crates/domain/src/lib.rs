//! # ChainRaffle ドメイン層
//!
//! ラッフルのリクエストを検証するための値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 生成時に検証し、不正な値の存在を型レベルで排除
//! - **不変性**: 一度作成したら変更不可
//!
//! このクレートにはオンチェーン連携や永続化は含まれない。
//! 現段階のプロダクトはリクエストの受付と検証のみを行うため、
//! ドメイン層の責務は「不正な入力を API 層に渡さないこと」に限定される。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`raffle`] - 管理アクションとラッフル設定の値オブジェクト
//! - [`ticket`] - チケット購入リクエストの値オブジェクト
//! - [`wallet`] - ウォレットアドレス
//!
//! ## 使用例
//!
//! ```rust
//! use chainraffle_domain::{DomainError, wallet::WalletAddress};
//!
//! let address = WalletAddress::new("0x742d35Cc6634C0532925a3b844Bc454e4438f44e");
//! assert!(address.is_ok());
//!
//! let error = WalletAddress::new("0x123");
//! assert!(matches!(error, Err(DomainError::Validation(_))));
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod raffle;
pub mod ticket;
pub mod wallet;

pub use error::DomainError;
