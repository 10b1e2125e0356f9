//! # 管理アクションとラッフル設定
//!
//! 管理エンドポイントが受け付けるアクションと、
//! 設定可能なパラメータの値オブジェクトを定義する。

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::DomainError;

/// 管理アクション
///
/// 管理エンドポイントが受け付ける 7 種類の操作。
/// ワイヤー表現は camelCase（例: `"setTicketPrice"`）。
///
/// `setTicketPrice` / `setMaxTickets` / `setRoundDuration` の 3 つは
/// 正の数値 `value` を必須とする（[`requires_value`](Self::requires_value)）。
/// 残りのラウンド制御・一時停止系アクションは `value` を取らない。
///
/// # 使用例
///
/// ```rust
/// use chainraffle_domain::raffle::AdminAction;
///
/// let action: AdminAction = "setTicketPrice".parse().unwrap();
/// assert_eq!(action, AdminAction::SetTicketPrice);
/// assert!(action.requires_value());
///
/// assert!("deleteEverything".parse::<AdminAction>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum AdminAction {
    /// チケット価格を設定する
    SetTicketPrice,
    /// ラウンドあたりの最大チケット数を設定する
    SetMaxTickets,
    /// ラウンド期間を設定する
    SetRoundDuration,
    /// 新しいラウンドを開始する
    StartRound,
    /// 現在のラウンドを終了する
    EndRound,
    /// ラッフルを一時停止する
    PauseRaffle,
    /// ラッフルの一時停止を解除する
    UnpauseRaffle,
}

impl AdminAction {
    /// ワイヤー文字列からアクションをパースする
    ///
    /// # エラー
    ///
    /// 未知のアクション文字列の場合は `DomainError::Validation` を返す。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Self::from_str(value)
            .map_err(|_| DomainError::Validation(format!("不正なアクションです: {value}")))
    }

    /// このアクションが数値 `value` を必須とするかを返す
    pub fn requires_value(&self) -> bool {
        matches!(
            self,
            Self::SetTicketPrice | Self::SetMaxTickets | Self::SetRoundDuration
        )
    }

    /// ワイヤー表現の文字列を取得する
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for AdminAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

define_positive_number! {
    /// チケット価格（値オブジェクト）
    ///
    /// ネイティブトークン建ての 1 枚あたり価格（例: 0.001 ETH）。
    pub struct TicketPrice {
        label: "チケット価格",
    }
}

define_positive_number! {
    /// ラウンドあたりの最大チケット数（値オブジェクト）
    pub struct MaxTickets {
        label: "最大チケット数",
    }
}

define_positive_number! {
    /// ラウンド期間（値オブジェクト、ミリ秒単位）
    pub struct RoundDuration {
        label: "ラウンド期間",
    }
}
