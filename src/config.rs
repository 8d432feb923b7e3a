use leptos::*;
use serde::{Deserialize, Serialize};

use crate::models::review::ValidationPolicy;
use crate::utils::money::CurrencyConfig;

/// Client settings shared through context.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Backend origin; empty means same origin.
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub review_policy: ValidationPolicy,
}

impl AppConfig {
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(feature = "ssr")]
pub use server::{BackendConfig, ConfigError};

#[cfg(feature = "ssr")]
mod server {
    use std::path::PathBuf;

    use thiserror::Error;

    pub const FIXTURES_ENV: &str = "STOREFRONT_FIXTURES";
    pub const DEFAULT_FIXTURES: &str = "fixtures/dev.json";

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to read {path}: {source}")]
        Read {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("failed to parse {path}: {source}")]
        Parse {
            path: PathBuf,
            #[source]
            source: serde_json::Error,
        },
    }

    /// Where the development backend reads its canned data from.
    #[derive(Debug, Clone)]
    pub struct BackendConfig {
        pub fixtures_path: PathBuf,
    }

    impl BackendConfig {
        pub fn from_env() -> Self {
            let fixtures_path = std::env::var(FIXTURES_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FIXTURES));
            Self { fixtures_path }
        }
    }
}
