use super::orchestrator::AnalysisOrchestrator;
use crate::config::ServiceConfig;
use crate::session::AnalysisSession;
use crate::transport::{HttpTransport, InferenceTransport};
use crate::Result;
use std::sync::{Arc, Mutex};

/// Builder for [`AnalysisOrchestrator`].
///
/// Keep this surface area small: a config, and optionally a transport.
pub struct OrchestratorBuilder {
    config: Option<ServiceConfig>,
    transport: Option<Arc<dyn InferenceTransport>>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl OrchestratorBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            base_url_override: None,
        }
    }

    /// Use an explicit configuration instead of [`ServiceConfig::from_env`].
    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the HTTP transport, e.g. with an in-process fake.
    pub fn transport(mut self, transport: Arc<dyn InferenceTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the configured base URL.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<AnalysisOrchestrator> {
        let config = match self.config {
            Some(config) => config,
            None => ServiceConfig::from_env()?,
        };
        let config = match self.base_url_override {
            Some(url) => config.with_base_url(&url)?,
            None => config,
        };

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(config.clone())?) as Arc<dyn InferenceTransport>,
        };

        Ok(AnalysisOrchestrator {
            config,
            transport,
            session: Mutex::new(AnalysisSession::new()),
        })
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
