/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: auth: InboundAuth (起動時に一度だけ構築、以降は読み取り専用)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::InboundAuth;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<InboundAuth>,
}

impl AppState {
    pub fn new(auth: Arc<InboundAuth>) -> Self {
        Self { auth }
    }
}
