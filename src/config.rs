//! Client configuration
//!
//! Loaded from YAML, e.g.:
//!
//! ```yaml
//! base_url: https://app.honeybadger.io
//! timeout_secs: 30
//! headers:
//!   Authorization: Basic dG9rZW46
//! pagination:
//!   records_path: results
//!   next_path: links.next
//!   max_pages: 500
//! ```

use crate::decode::{JsonPageDecoder, DEFAULT_NEXT_PATH, DEFAULT_RECORDS_PATH};
use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::pagination::PaginationConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://app.honeybadger.io/";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Page layout and traversal limits
    #[serde(default)]
    pub pagination: PaginationSettings,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("honeybadger-teams/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
            pagination: PaginationSettings::default(),
        }
    }
}

/// Pagination section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Path to the record array in a page body
    #[serde(default = "default_records_path")]
    pub records_path: String,

    /// Path to the next-page reference in a page body
    #[serde(default = "default_next_path")]
    pub next_path: String,

    /// Upper bound on pages per traversal
    #[serde(default)]
    pub max_pages: Option<u32>,
}

fn default_records_path() -> String {
    DEFAULT_RECORDS_PATH.to_string()
}

fn default_next_path() -> String {
    DEFAULT_NEXT_PATH.to_string()
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            records_path: default_records_path(),
            next_path: default_next_path(),
            max_pages: None,
        }
    }
}

impl ClientConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Check values that serde alone cannot
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        if self.pagination.next_path.is_empty() {
            return Err(Error::invalid_value("pagination.next_path", "must not be empty"));
        }
        if self.pagination.max_pages == Some(0) {
            return Err(Error::invalid_value(
                "pagination.max_pages",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Add a header, replacing any previous value
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(&self.user_agent);
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }

    /// Traversal limits derived from this config
    pub fn pagination_config(&self) -> PaginationConfig {
        PaginationConfig {
            max_pages: self.pagination.max_pages,
        }
    }

    /// Page decoder matching the configured layout
    pub fn page_decoder(&self) -> JsonPageDecoder {
        JsonPageDecoder::with_paths(&self.pagination.records_path, &self.pagination.next_path)
    }
}
