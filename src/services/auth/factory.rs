/// Factory: build `InboundAuth` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::InboundAuth;

pub fn build_inbound_auth(config: &Config) -> Arc<InboundAuth> {
    let auth = InboundAuth::new(&config.inbound_auth);

    if auth.is_enabled() {
        tracing::info!(
            keys = auth.key_count(),
            skip_paths = auth.skip_path_count(),
            "inbound API key authentication enabled"
        );
    } else {
        tracing::warn!("inbound API key authentication disabled: no keys configured");
    }

    Arc::new(auth)
}
