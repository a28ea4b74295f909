//! Process-wide configuration, initialised once at startup

use std::sync::OnceLock;

use listings_client::{ListingsClient, DEFAULT_BASE_URL};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Environment variable naming the listing store base URL
pub const API_URL_VAR: &str = "API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from the runtime environment, then the build-time
    /// environment (browser builds have no process env), then the default.
    pub fn from_env() -> Self {
        let runtime = std::env::var(API_URL_VAR).ok();
        Self::resolve(runtime.as_deref(), option_env!("API_URL"))
    }

    fn resolve(runtime: Option<&str>, build_time: Option<&str>) -> Self {
        let url = [runtime, build_time]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self::new(url)
    }

    pub fn client(&self) -> ListingsClient {
        ListingsClient::new(self.api_base_url.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Install the configuration. Call this once at startup; later calls are
/// ignored.
pub fn init_config(config: AppConfig) {
    let requested = config.api_base_url.clone();
    if CONFIG.set(config).is_err() {
        tracing::warn!(api_url = %requested, "Configuration already initialised, ignoring");
    } else {
        tracing::info!(api_url = %requested, "Configured listing store");
    }
}

/// The installed configuration, or the environment-derived one if
/// `init_config` was never called.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

/// Client for the configured listing store.
pub fn api_client() -> ListingsClient {
    config().client()
}
