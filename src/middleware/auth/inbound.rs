//! Inbound API key 検証 → 通過 or 401
//!
//! - キー未設定なら何もしない (後方互換)
//! - skip path は資格情報を見ずに通す
//! - それ以外は `Authorization` / `X-API-Key` から取り出したキーを許可セットと照合する
//!
//! 判定ロジックは `services::auth::InboundAuth` 側。ここは axum への配線とログだけ。

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{Admission, AuthDecision};
use crate::state::AppState;

/// Router 全体に inbound auth を掛ける。
///
/// 例：
/// ```ignore
/// let router = Router::new().route("/usage", get(usage));
/// let router = middleware::auth::inbound::apply(router, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, inbound_auth_middleware))
}

async fn inbound_auth_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // nest 配下では req.uri() が prefix を失うので、元の URI を優先する
    let path = req
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.0.path())
        .unwrap_or_else(|| req.uri().path());

    match state.auth.decide(req.headers(), path) {
        AuthDecision::Admitted(Admission::SkipPath) => {
            tracing::debug!(path, "inbound auth skipped");
        }
        AuthDecision::Admitted(_) => {}
        AuthDecision::Rejected(reason) => {
            tracing::warn!(path, reason = reason.as_str(), "inbound auth rejected");
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(req).await)
}
