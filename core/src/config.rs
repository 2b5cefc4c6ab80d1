//! Where the employee API lives.

use crate::client::{RecordClient, DEFAULT_BASE_URL};

/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "ROSTER_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `ROSTER_API_URL`, falling back to the default base URL when it
    /// is unset or blank.
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn client(&self) -> RecordClient {
        RecordClient::new(&self.base_url)
    }
}
