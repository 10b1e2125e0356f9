//! # ChainRaffle API ライブラリ
//!
//! ラッフル公開 API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとミドルウェアスタックの構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーレスポンスヘルパー
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（キャッシュ制御等）
//! - `openapi`: OpenAPI 仕様定義

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
