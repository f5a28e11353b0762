//! Ward API client configuration.
//!
//! The backend is addressed by a project base URL and an anonymous API
//! key. Both are read from the environment at startup; the `VITE_`
//! prefixed names used by browser builds are accepted as fallbacks.

use url::Url;
use zeroize::Zeroizing;

/// Configuration for connecting to the ward backend.
///
/// Custom `Debug` implementation redacts the `anon_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct WardApiConfig {
    /// Project base URL, e.g. `https://abcd.supabase.co`. The REST
    /// endpoints live under `{base_url}/rest/v1/`.
    pub base_url: Url,
    /// Anonymous API key, sent as both `apikey` and bearer token.
    pub anon_key: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WardApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WardApiConfig")
            .field("base_url", &self.base_url)
            .field("anon_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WardApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SUPABASE_URL` or `VITE_SUPABASE_URL` (required)
    /// - `SUPABASE_ANON_KEY` or `VITE_SUPABASE_ANON_KEY` (required)
    /// - `WARD_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = first_env(&["SUPABASE_URL", "VITE_SUPABASE_URL"])
            .ok_or(ConfigError::MissingUrl)?;
        let anon_key = first_env(&["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"])
            .ok_or(ConfigError::MissingKey)?;

        Ok(Self {
            base_url: parse_url("SUPABASE_URL", &raw_url)?,
            anon_key: Zeroizing::new(anon_key),
            timeout_secs: std::env::var("WARD_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Build a configuration from explicit values.
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("base_url", base_url)?,
            anon_key: Zeroizing::new(anon_key.to_string()),
            timeout_secs: 30,
        })
    }

    /// Create a configuration pointing at a local development backend.
    pub fn local(port: u16, anon_key: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new(&format!("http://127.0.0.1:{port}"), anon_key)?;
        config.timeout_secs = 5;
        Ok(config)
    }
}

fn first_env(vars: &[&str]) -> Option<String> {
    vars.iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}

fn parse_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SUPABASE_URL environment variable is required")]
    MissingUrl,
    #[error("SUPABASE_ANON_KEY environment variable is required")]
    MissingKey,
    #[error("anon key contains characters not allowed in an HTTP header")]
    InvalidKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
