//! # チケット購入 API ハンドラ
//!
//! チケット購入の記録を受け付けるエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/v1/tickets/buy` - チケット購入の記録
//! - `GET /api/v1/tickets/buy` - 常に 405（購入は POST のみ）
//!
//! ## 現段階の責務
//!
//! 入力の検証とエコーバックのみ。トランザクションのオンチェーン検証、
//! 購入レコードの永続化、ラウンド統計の更新は未実装。

use axum::{Json, http::StatusCode, response::IntoResponse};
use chainraffle_domain::{
    ticket::{NetworkName, TicketCount, TransactionHash},
    wallet::WalletAddress,
};
use chainraffle_shared::{ApiResponse, ErrorResponse, event_log::event, log_business_event};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{domain_error_response, method_not_allowed_response, validation_error_response};

// --- リクエスト型 ---

/// チケット購入リクエスト
///
/// 全フィールドを `Option` で受け、欠落を 422 ではなく
/// 400（必須フィールド不足）として扱う。
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyTicketsRequest {
    /// 購入者のウォレットアドレス
    pub wallet_address: Option<String>,
    /// 購入チケット枚数（1 〜 100）
    pub number_of_tickets: Option<i64>,
    /// 支払いトランザクションのハッシュ
    pub transaction_hash: Option<String>,
    /// 購入が行われたネットワーク識別子
    pub network: Option<String>,
}

// --- レスポンス型 ---

/// 受け付けた購入内容のエコーデータ
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseData {
    /// 購入者のウォレットアドレス
    #[schema(value_type = String)]
    pub wallet_address: WalletAddress,
    /// 購入チケット枚数
    #[schema(value_type = i64)]
    pub number_of_tickets: TicketCount,
    /// 支払いトランザクションのハッシュ
    #[schema(value_type = String)]
    pub transaction_hash: TransactionHash,
    /// ネットワーク識別子
    #[schema(value_type = String)]
    pub network: NetworkName,
    /// 受付時刻
    pub timestamp: DateTime<Utc>,
}

// --- ハンドラ ---

/// POST /api/v1/tickets/buy
///
/// チケット購入を記録する。
///
/// ## 検証フロー
///
/// 1. 4 フィールドすべての存在チェック（欠落 → 400）
/// 2. ウォレットアドレスの構文検証（不正 → 400）
/// 3. チケット枚数の範囲検証 1 〜 100（範囲外 → 400）
/// 4. トランザクションハッシュ・ネットワークの存在検証（空 → 400）
///
/// 検証を通過した入力をエコーして返す。
#[utoipa::path(
    post,
    path = "/api/v1/tickets/buy",
    tag = "tickets",
    request_body = BuyTicketsRequest,
    responses(
        (status = 200, description = "購入受付", body = ApiResponse<PurchaseData>),
        (status = 400, description = "検証エラー", body = ErrorResponse),
        (status = 405, description = "POST 以外のメソッド", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn buy_tickets(Json(req): Json<BuyTicketsRequest>) -> impl IntoResponse {
    // Step 1: 必須フィールドの存在チェック
    let (Some(wallet_address), Some(number_of_tickets), Some(transaction_hash), Some(network)) = (
        req.wallet_address,
        req.number_of_tickets,
        req.transaction_hash,
        req.network,
    ) else {
        log_business_event!(
            event.category = event::category::RAFFLE,
            event.action = event::action::PURCHASE_REJECTED,
            event.entity_type = event::entity_type::TICKET_PURCHASE,
            event.result = event::result::FAILURE,
            event.reason = "missing_fields",
            "必須フィールド不足のため購入を拒否"
        );
        return validation_error_response("必須フィールドが不足しています");
    };

    // Step 2〜4: 値オブジェクトへの変換（= 検証）
    let wallet_address = match WalletAddress::new(wallet_address) {
        Ok(address) => address,
        Err(e) => return reject_purchase("invalid_wallet_address", &e),
    };

    let number_of_tickets = match TicketCount::new(number_of_tickets) {
        Ok(count) => count,
        Err(e) => return reject_purchase("invalid_ticket_count", &e),
    };

    let transaction_hash = match TransactionHash::new(transaction_hash) {
        Ok(hash) => hash,
        Err(e) => return reject_purchase("invalid_transaction_hash", &e),
    };

    let network = match NetworkName::new(network) {
        Ok(network) => network,
        Err(e) => return reject_purchase("invalid_network", &e),
    };

    // トランザクションのオンチェーン検証は未実装
    // 購入レコードの永続化は未実装
    // ラウンド統計の更新は未実装

    log_business_event!(
        event.category = event::category::RAFFLE,
        event.action = event::action::TICKETS_PURCHASED,
        event.entity_type = event::entity_type::TICKET_PURCHASE,
        event.result = event::result::SUCCESS,
        wallet_address = %wallet_address,
        number_of_tickets = %number_of_tickets,
        network = %network,
        "チケット購入を受け付けた"
    );

    let response = ApiResponse::with_message(
        "チケット購入を受け付けました",
        PurchaseData {
            wallet_address,
            number_of_tickets,
            transaction_hash,
            network,
            timestamp: Utc::now(),
        },
    );
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/v1/tickets/buy
///
/// 購入エンドポイントは POST のみを受け付ける。
/// GET には常に 405 を返す。
#[utoipa::path(
    get,
    path = "/api/v1/tickets/buy",
    tag = "tickets",
    responses(
        (status = 405, description = "POST 以外のメソッド", body = ErrorResponse)
    )
)]
pub async fn buy_tickets_method_not_allowed() -> impl IntoResponse {
    method_not_allowed_response("チケット購入は POST のみ受け付けます")
}

// --- ヘルパー ---

/// 検証エラーをイベントログ付きで 400 レスポンスに変換する
fn reject_purchase(reason: &str, error: &chainraffle_domain::DomainError) -> axum::response::Response {
    log_business_event!(
        event.category = event::category::RAFFLE,
        event.action = event::action::PURCHASE_REJECTED,
        event.entity_type = event::entity_type::TICKET_PURCHASE,
        event.result = event::result::FAILURE,
        event.reason = reason,
        "検証エラーのため購入を拒否: {}",
        error
    );
    domain_error_response(error)
}
