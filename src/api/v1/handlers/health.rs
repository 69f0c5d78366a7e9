/*
 * Responsibility
 * - GET /health (疎通用)
 * - skip path に入れるかどうかで auth の掛かり方を確認できる
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
