/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, CORS 許可, Inbound API key 設定など)
 * - 設定値のバリデーション (不正なら起動失敗)
 * - Inbound auth の設定は失敗しない (空なら認証なし)
 */
use std::collections::HashSet;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

pub const INBOUND_API_KEY: &str = "INBOUND_API_KEY";
pub const INBOUND_API_KEYS: &str = "INBOUND_API_KEYS";
pub const INBOUND_AUTH_SKIP_PATHS: &str = "INBOUND_AUTH_SKIP_PATHS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Accepted keys and skip paths, resolved once before the filter is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundAuthConfig {
    pub allowed_keys: HashSet<String>,
    pub skip_paths: HashSet<String>,
}

impl InboundAuthConfig {
    pub fn from_env() -> Self {
        let single = std::env::var(INBOUND_API_KEY).ok();
        let list = std::env::var(INBOUND_API_KEYS).ok();
        let skip = std::env::var(INBOUND_AUTH_SKIP_PATHS).ok();

        Self::from_values(single.as_deref(), list.as_deref(), skip.as_deref())
    }

    /// Builds the config from raw variable values.
    ///
    /// Absent or blank input never fails; it just contributes nothing.
    pub fn from_values(single: Option<&str>, list: Option<&str>, skip: Option<&str>) -> Self {
        let mut allowed_keys: HashSet<String> = split_csv(list.unwrap_or_default()).collect();

        if let Some(key) = single.map(str::trim).filter(|s| !s.is_empty()) {
            allowed_keys.insert(key.to_string());
        }

        let skip_paths = split_csv(skip.unwrap_or_default()).collect();

        Self {
            allowed_keys,
            skip_paths,
        }
    }
}

fn split_csv(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub inbound_auth: InboundAuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins =
            split_csv(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default()).collect();

        let inbound_auth = InboundAuthConfig::from_env();

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            inbound_auth,
        })
    }
}
