/*
 * Responsibility
 * - GET /usage
 * - よく INBOUND_AUTH_SKIP_PATHS に入れられる route の代表
 * - 公開されうるので認証設定 (キー数など) は返さない
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn usage() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "usage": {
                "service": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            }
        })),
    )
}
