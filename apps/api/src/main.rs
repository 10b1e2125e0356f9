//! # ChainRaffle API サーバー
//!
//! ブロックチェーンラッフルのフロントエンドが呼び出す公開 API サーバー。
//!
//! ## 役割
//!
//! 現段階では、リクエストの受付と検証のみを行う薄いシムとして動作する:
//!
//! - **管理操作の受付**: 設定変更・ラウンド制御の入力検証とエコー
//! - **チケット購入の受付**: 購入リクエストの入力検証とエコー
//!
//! トランザクションのオンチェーン検証、購入レコードの永続化、
//! スマートコントラクトの呼び出しは未実装（受付箇所にマークあり）。
//!
//! ## 環境変数
//!
//! ポート番号は `.env` ファイルで設定する。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | **Yes** | ポート番号 |
//! | `ADMIN_SECRET_KEY` | No* | 管理キー（未設定時はデフォルト値 + 警告ログ） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`） |
//!
//! *未設定でも起動するが、本番環境では必ず設定すること。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p chainraffle-api
//!
//! # 本番環境（環境変数を直接指定）
//! API_PORT=3000 ADMIN_SECRET_KEY=... cargo run -p chainraffle-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use chainraffle_api::{app_builder::build_app, config::ApiConfig, handler::AdminState};
use chainraffle_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    chainraffle_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    // ハンドラ State の構築（リクエスト間で共有される可変状態は存在しない）
    let admin_state = Arc::new(AdminState {
        admin_key: config.admin_key.clone(),
    });

    let app = build_app(admin_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
