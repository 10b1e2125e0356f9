//! # アプリケーション構築
//!
//! ルーターとミドルウェアスタックの構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! 統合テストからも使用するため、バイナリではなくライブラリ側に置く。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use chainraffle_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    error::not_found,
    handler::{
        AdminState,
        buy_tickets,
        buy_tickets_method_not_allowed,
        get_admin_settings,
        health_check,
        post_admin_action,
    },
    middleware::no_cache,
};

/// ルーターを構築する
///
/// Request ID + TraceLayer により、すべての HTTP リクエストに request_id が
/// 付与されログに自動注入される。
pub fn build_app(admin_state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // 管理 API（同一パスに POST / GET）
        .route(
            "/api/v1/admin",
            post(post_admin_action).get(get_admin_settings),
        )
        .with_state(admin_state)
        // チケット購入 API（GET は常に 405）
        .route(
            "/api/v1/tickets/buy",
            post(buy_tickets).get(buy_tickets_method_not_allowed),
        )
        // 未知のパスは 404 Problem Details
        .fallback(not_found)
        // キャッシュ制御: 動的 API レスポンスがキャッシュされないようにする
        .layer(from_fn(no_cache))
        // dApp フロントエンドは別オリジンで配信されるため CORS を許可する
        .layer(CorsLayer::permissive())
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成
        //    （またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
