//! Process-wide configuration, read once at startup.
//!
//! Environment variables:
//! - `OFFICIAL_EMAIL`: contact address echoed in every envelope
//!   (default: "official@example.com")
//! - `GEMINI_API_KEY`: provider key; unset or empty runs the AI resolver in
//!   degraded mode
//! - `GEMINI_MODEL`: provider model id (default: "gemini-1.5-flash")
//! - `GEMINI_BASE_URL`: provider API root (default: Google v1beta)
//! - `BFHL_PORT`: server listen port (default: "3000")

use std::time::Duration;

pub const DEFAULT_OFFICIAL_EMAIL: &str = "official@example.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PORT: u16 = 3000;

/// Default cut-off for outbound provider calls.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Live AI provider settings. Absent from [`ServiceConfig`] in degraded mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Total time allowed for one provider call.
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ProviderConfig {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: PROVIDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `{base_url}/models/{model}:generateContent`, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Immutable service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub official_email: String,
    pub provider: Option<ProviderConfig>,
    pub port: u16,
}

impl ServiceConfig {
    /// Degraded-mode config with the given email; used by tests and the CLI.
    pub fn new(official_email: impl Into<String>) -> Self {
        ServiceConfig {
            official_email: official_email.into(),
            provider: None,
            port: DEFAULT_PORT,
        }
    }

    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let official_email =
            lookup("OFFICIAL_EMAIL").unwrap_or_else(|| DEFAULT_OFFICIAL_EMAIL.to_string());

        let provider = lookup("GEMINI_API_KEY")
            .filter(|key| !key.is_empty())
            .map(|key| {
                let mut provider = ProviderConfig::new(key);
                if let Some(model) = lookup("GEMINI_MODEL") {
                    provider = provider.with_model(model);
                }
                if let Some(base_url) = lookup("GEMINI_BASE_URL") {
                    provider = provider.with_base_url(base_url);
                }
                provider
            });

        let port = match lookup("BFHL_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("ignoring invalid BFHL_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        ServiceConfig {
            official_email,
            provider,
            port,
        }
    }
}
