/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 認証は app.rs で Router 全体に掛ける (ここでは route ごとに分けない)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, usage::usage};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/usage", get(usage))
}
