//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保つ: JSON ボディのパース → 検証 → エコーレスポンス。
//!   オンチェーン検証や永続化は現段階では行わない
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `admin`: 管理操作（設定変更、ラウンド制御、設定スナップショット取得）
//! - `purchase`: チケット購入の記録

pub mod admin;
pub mod health;
pub mod purchase;

pub use admin::{AdminState, get_admin_settings, post_admin_action};
pub use health::health_check;
pub use purchase::{buy_tickets, buy_tickets_method_not_allowed};
