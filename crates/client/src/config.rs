//! Remote catalog connection settings.

use std::time::Duration;

use storefront_core::{DomainError, DomainResult};

pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "STOREFRONT_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root; `/products` is appended per call.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = match lookup(ENV_API_URL) {
            Some(url) if url.trim().is_empty() => {
                return Err(DomainError::validation(format!("{ENV_API_URL} cannot be empty")));
            }
            Some(url) => Self::new(url.trim()),
            None => Self::default(),
        };

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                DomainError::validation(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub(crate) fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub(crate) fn product_url(&self, id: impl core::fmt::Display) -> String {
        format!("{}/products/{id}", self.base_url)
    }
}
