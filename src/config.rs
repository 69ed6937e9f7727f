//! Service configuration.
//!
//! Values are resolved in this order: explicit builder calls, then environment
//! variables, then a YAML file (if one was loaded), then built-in defaults.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `FLOOD_RISK_BASE_URL` | Base URL of the inference service |
//! | `FLOOD_RISK_PROXY_URL` | Proxy for all outbound requests |
//! | `FLOOD_RISK_HTTP_TIMEOUT_SECS` | Per-request timeout; unset means transport default |

use crate::types::Modality;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://ai-flood-risk-backend.onrender.com";
pub const DEFAULT_IMAGE_ENDPOINT: &str = "/api/analyze/image";
pub const DEFAULT_COORDINATES_ENDPOINT: &str = "/api/analyze/coordinates";

pub const ENV_BASE_URL: &str = "FLOOD_RISK_BASE_URL";
pub const ENV_PROXY_URL: &str = "FLOOD_RISK_PROXY_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "FLOOD_RISK_HTTP_TIMEOUT_SECS";

/// Resolved configuration for talking to the inference service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    base_url: String,
    image_endpoint: String,
    coordinates_endpoint: String,
    proxy_url: Option<String>,
    timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// Defaults overridden by environment variables.
    pub fn from_env() -> Result<Self> {
        ServiceConfigBuilder::new().build()
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        ServiceConfigBuilder::new().yaml_file(path)?.build()
    }

    /// Same configuration pointed at a different base URL.
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.base_url = validate_base_url(url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn proxy_url(&self) -> Option<&str> {
        self.proxy_url.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Endpoint path for a modality.
    pub fn endpoint_for(&self, modality: Modality) -> &str {
        match modality {
            Modality::Coordinates => &self.coordinates_endpoint,
            Modality::Image => &self.image_endpoint,
        }
    }

    /// Join the base URL with an endpoint path.
    pub fn url_for(&self, endpoint_path: &str) -> String {
        format!("{}{}", self.base_url, normalize_path(endpoint_path))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            coordinates_endpoint: DEFAULT_COORDINATES_ENDPOINT.to_string(),
            proxy_url: None,
            timeout: None,
        }
    }
}

/// On-disk shape of the YAML configuration file. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfigFile {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub image_endpoint: Option<String>,
    #[serde(default)]
    pub coordinates_endpoint: Option<String>,
    #[serde(default)]
    pub proxy_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Builder for [`ServiceConfig`].
pub struct ServiceConfigBuilder {
    base_url: Option<String>,
    image_endpoint: Option<String>,
    coordinates_endpoint: Option<String>,
    proxy_url: Option<String>,
    timeout: Option<Duration>,
    file: ServiceConfigFile,
}

impl ServiceConfigBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            image_endpoint: None,
            coordinates_endpoint: None,
            proxy_url: None,
            timeout: None,
            file: ServiceConfigFile::default(),
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn image_endpoint(mut self, path: impl Into<String>) -> Self {
        self.image_endpoint = Some(path.into());
        self
    }

    pub fn coordinates_endpoint(mut self, path: impl Into<String>) -> Self {
        self.coordinates_endpoint = Some(path.into());
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Explicit per-request timeout. Without one the transport default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use values from a YAML document as the lowest-priority layer.
    pub fn yaml_str(mut self, yaml: &str) -> Result<Self> {
        self.file = serde_yaml::from_str(yaml)?;
        Ok(self)
    }

    pub fn yaml_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        self.yaml_str(&content)
    }

    pub fn build(self) -> Result<ServiceConfig> {
        self.build_with_env(|key| std::env::var(key).ok())
    }

    pub(crate) fn build_with_env<F>(self, env: F) -> Result<ServiceConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = self
            .base_url
            .or_else(|| env(ENV_BASE_URL))
            .or(self.file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = validate_base_url(&base_url)?;

        let image_endpoint = self
            .image_endpoint
            .or(self.file.image_endpoint)
            .unwrap_or_else(|| DEFAULT_IMAGE_ENDPOINT.to_string());
        let coordinates_endpoint = self
            .coordinates_endpoint
            .or(self.file.coordinates_endpoint)
            .unwrap_or_else(|| DEFAULT_COORDINATES_ENDPOINT.to_string());

        let proxy_url = self
            .proxy_url
            .or_else(|| env(ENV_PROXY_URL))
            .or(self.file.proxy_url)
            .filter(|s| !s.trim().is_empty());

        let timeout = match self.timeout {
            Some(t) => Some(t),
            None => match env(ENV_HTTP_TIMEOUT_SECS) {
                Some(raw) => Some(parse_timeout_secs(&raw)?),
                None => self.file.timeout_secs.map(Duration::from_secs),
            },
        }
        .filter(|t| !t.is_zero());

        Ok(ServiceConfig {
            base_url,
            image_endpoint: normalize_path(&image_endpoint),
            coordinates_endpoint: normalize_path(&coordinates_endpoint),
            proxy_url,
            timeout,
        })
    }
}

impl Default for ServiceConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| Error::configuration(format!("Invalid base URL '{}': {}", raw, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::configuration(format!(
            "Base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            Error::configuration(format!(
                "{} must be a whole number of seconds, got '{}'",
                ENV_HTTP_TIMEOUT_SECS, raw
            ))
        })
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
