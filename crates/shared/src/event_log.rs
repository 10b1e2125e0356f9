//! # ビジネスイベントログの構造化ヘルパー
//!
//! ログを `jq` で効率的に調査できるよう、ログフィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`event.action`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const RAFFLE: &str = "raffle";
        pub const ADMIN: &str = "admin";
    }

    /// イベントアクション
    pub mod action {
        // チケット購入
        pub const TICKETS_PURCHASED: &str = "raffle.tickets_purchased";
        pub const PURCHASE_REJECTED: &str = "raffle.purchase_rejected";

        // 管理操作
        pub const ADMIN_ACTION_ACCEPTED: &str = "admin.action_accepted";
        pub const ADMIN_ACTION_REJECTED: &str = "admin.action_rejected";
        pub const ADMIN_AUTH_FAILURE: &str = "admin.auth_failure";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const TICKET_PURCHASE: &str = "ticket_purchase";
        pub const RAFFLE_SETTING: &str = "raffle_setting";
        pub const RAFFLE_ROUND: &str = "raffle_round";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}
