//! # OpenAPI 仕様定義
//!
//! utoipa を使用して API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::{
    Modify,
    OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

use crate::handler::{admin, health, purchase};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChainRaffle API",
        version = "0.1.0",
        description = "ブロックチェーンラッフル ChainRaffle の公開 API"
    ),
    paths(
        // health
        health::health_check,
        // admin
        admin::post_admin_action,
        admin::get_admin_settings,
        // tickets
        purchase::buy_tickets,
        purchase::buy_tickets_method_not_allowed,
    ),
    components(schemas(
        admin::AdminActionRequest,
        admin::AdminActionData,
        admin::AdminSettingsData,
        purchase::BuyTicketsRequest,
        purchase::PurchaseData,
        chainraffle_shared::ErrorResponse,
        chainraffle_shared::HealthResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "admin", description = "管理操作"),
        (name = "tickets", description = "チケット購入")
    )
)]
pub struct ApiDoc;

/// `x-admin-key` ヘッダーによる API キー認証スキームを追加する
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                    admin::ADMIN_KEY_HEADER,
                ))),
            );
        }
    }
}
