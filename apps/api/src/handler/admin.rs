//! # 管理 API ハンドラ
//!
//! ラッフルの設定変更・ラウンド制御を受け付けるエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/v1/admin` - 管理アクションの実行
//! - `GET /api/v1/admin` - 現在の設定スナップショットの取得
//!
//! ## 認証
//!
//! 共有シークレット（管理キー）による認証のみ。POST はボディの `adminKey`、
//! GET は `x-admin-key` ヘッダーで受け取り、定数時間比較で検証する。

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chainraffle_domain::raffle::{AdminAction, MaxTickets, RoundDuration, TicketPrice};
use chainraffle_shared::{ApiResponse, ErrorResponse, event_log::event, log_business_event};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use utoipa::ToSchema;

use crate::error::{domain_error_response, unauthorized_response};

/// 管理キーを渡すヘッダー名（GET 用）
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// 管理 API 用の State
///
/// 設定済みの管理キーのみを保持する。リクエスト間で共有される
/// 可変状態は存在しない。
pub struct AdminState {
    /// 設定済みの管理キー
    pub admin_key: String,
}

// --- リクエスト型 ---

/// 管理アクションリクエスト
///
/// 全フィールドを `Option` で受け、ハンドラ内で検証する。
/// フィールド欠落を deserialization エラー（422）ではなく
/// 401 / 400 の検証エラーとして扱うため。
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminActionRequest {
    /// アクション名（camelCase、例: `"setTicketPrice"`）
    pub action: Option<String>,
    /// 設定値（`set*` 系アクションで必須の正の数値）
    #[schema(value_type = Option<Object>)]
    pub value: Option<serde_json::Value>,
    /// 共有シークレット
    pub admin_key: Option<String>,
}

// --- レスポンス型 ---

/// 受け付けた管理アクションのエコーデータ
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminActionData {
    /// 受け付けたアクション
    #[schema(value_type = String)]
    pub action: AdminAction,
    /// 受け付けた設定値（value を取らないアクションでは省略）
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<serde_json::Value>,
    /// 受付時刻
    pub timestamp: DateTime<Utc>,
}

/// 現在のラッフル設定スナップショット
///
/// オンチェーン状態の参照は未実装のため、固定値を返す。
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettingsData {
    /// ラッフルが一時停止中かどうか
    pub raffle_paused: bool,
    /// 現在のラウンド番号
    pub current_round: u32,
    /// チケット価格（ネイティブトークン建て、文字列表現）
    pub ticket_price: String,
    /// ラウンドあたりの最大チケット数
    pub max_tickets: u32,
    /// ラウンド期間（ミリ秒）
    pub round_duration: u64,
}

impl Default for AdminSettingsData {
    /// ハードコードされた設定スナップショット
    fn default() -> Self {
        Self {
            raffle_paused: false,
            current_round: 1,
            ticket_price: "0.001".to_string(),
            max_tickets: 1000,
            round_duration: 3_600_000, // 1 時間
        }
    }
}

// --- ハンドラ ---

/// POST /api/v1/admin
///
/// 管理アクションを受け付ける。
///
/// ## 検証フロー
///
/// 1. `adminKey` を設定済みの管理キーと定数時間比較（不一致 → 401）
/// 2. `action` を既知の 7 アクションとして解釈（未知 → 400）
/// 3. `set*` 系アクションは `value` が正の数値であることを検証（違反 → 400）
///
/// コントラクト呼び出しは未実装のため、検証を通過した入力をエコーして返す。
#[utoipa::path(
    post,
    path = "/api/v1/admin",
    tag = "admin",
    request_body = AdminActionRequest,
    responses(
        (status = 200, description = "アクション受付", body = ApiResponse<AdminActionData>),
        (status = 400, description = "検証エラー", body = ErrorResponse),
        (status = 401, description = "管理キー不一致", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn post_admin_action(
    State(state): State<Arc<AdminState>>,
    Json(req): Json<AdminActionRequest>,
) -> impl IntoResponse {
    // Step 1: 管理キーの検証
    if !admin_key_matches(&state.admin_key, req.admin_key.as_deref()) {
        log_business_event!(
            event.category = event::category::ADMIN,
            event.action = event::action::ADMIN_AUTH_FAILURE,
            event.result = event::result::FAILURE,
            "管理キー不一致のためリクエストを拒否"
        );
        return unauthorized_response();
    }

    // Step 2: アクション名の検証
    let action = match AdminAction::parse(req.action.as_deref().unwrap_or("")) {
        Ok(action) => action,
        Err(e) => {
            log_business_event!(
                event.category = event::category::ADMIN,
                event.action = event::action::ADMIN_ACTION_REJECTED,
                event.result = event::result::FAILURE,
                event.reason = "unknown_action",
                "未知の管理アクション: {:?}",
                req.action
            );
            return domain_error_response(&e);
        }
    };

    // Step 3: set 系アクションの値検証と、アクション別の処理
    // コントラクト呼び出しが入る予定の箇所には個別にマークしてある
    let validated = match action {
        AdminAction::SetTicketPrice => {
            // コントラクトの setTicketPrice 呼び出しは未実装（受付のみ）
            TicketPrice::new(numeric_value(req.value.as_ref())).map(|_| ())
        }
        AdminAction::SetMaxTickets => {
            // コントラクトの setMaxTickets 呼び出しは未実装（受付のみ）
            MaxTickets::new(numeric_value(req.value.as_ref())).map(|_| ())
        }
        AdminAction::SetRoundDuration => {
            // コントラクトの setRoundDuration 呼び出しは未実装（受付のみ）
            RoundDuration::new(numeric_value(req.value.as_ref())).map(|_| ())
        }
        // ラウンド制御・一時停止系は value を取らない
        // コントラクトの startRound / endRound / pause / unpause 呼び出しは未実装
        AdminAction::StartRound
        | AdminAction::EndRound
        | AdminAction::PauseRaffle
        | AdminAction::UnpauseRaffle => Ok(()),
    };

    if let Err(e) = validated {
        log_business_event!(
            event.category = event::category::ADMIN,
            event.action = event::action::ADMIN_ACTION_REJECTED,
            event.entity_type = event::entity_type::RAFFLE_SETTING,
            event.result = event::result::FAILURE,
            event.reason = "invalid_value",
            "管理アクション {} の値が不正: {}",
            action,
            e
        );
        return domain_error_response(&e);
    }

    log_business_event!(
        event.category = event::category::ADMIN,
        event.action = event::action::ADMIN_ACTION_ACCEPTED,
        event.entity_type = event::entity_type::RAFFLE_SETTING,
        event.result = event::result::SUCCESS,
        "管理アクション {} を受け付けた",
        action
    );

    let response = ApiResponse::with_message(
        format!("アクション {action} を受け付けました"),
        AdminActionData {
            action,
            value: req.value,
            timestamp: Utc::now(),
        },
    );
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/v1/admin
///
/// 現在のラッフル設定スナップショットを返す。
///
/// `x-admin-key` ヘッダーで管理キーを検証する（不一致・欠落 → 401）。
/// オンチェーン状態の参照は未実装のため、スナップショットは固定値。
#[utoipa::path(
    get,
    path = "/api/v1/admin",
    tag = "admin",
    security(("admin_key" = [])),
    responses(
        (status = 200, description = "設定スナップショット", body = ApiResponse<AdminSettingsData>),
        (status = 401, description = "管理キー不一致", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_admin_settings(
    State(state): State<Arc<AdminState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let provided = headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !admin_key_matches(&state.admin_key, provided) {
        log_business_event!(
            event.category = event::category::ADMIN,
            event.action = event::action::ADMIN_AUTH_FAILURE,
            event.result = event::result::FAILURE,
            "管理キー不一致のため設定取得を拒否"
        );
        return unauthorized_response();
    }

    let response = ApiResponse::new(AdminSettingsData::default());
    (StatusCode::OK, Json(response)).into_response()
}

// --- ヘルパー ---

/// 管理キーを定数時間で比較する
///
/// タイミング攻撃によるキー推測を防ぐため `subtle::ConstantTimeEq` を使用する。
/// キー未提供（`None`）は空文字列との比較として扱い、必ず不一致になる。
fn admin_key_matches(expected: &str, provided: Option<&str>) -> bool {
    let provided = provided.unwrap_or("");
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

/// `value` フィールドから数値を取り出す
///
/// 欠落または非数値の場合は NaN を返し、後段の値オブジェクト生成で
/// 検証エラーにする（エラーメッセージを値オブジェクト側に集約するため）。
fn numeric_value(value: Option<&serde_json::Value>) -> f64 {
    value.and_then(serde_json::Value::as_f64).unwrap_or(f64::NAN)
}
