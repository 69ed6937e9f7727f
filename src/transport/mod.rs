//! 传输层：向远程推理服务发送分析请求并对传输错误分类。
//!
//! Transport layer for the inference service.
//!
//! [`InferenceTransport`] is the seam the orchestrator talks to; [`HttpTransport`] is the
//! reqwest-backed implementation used in production.

mod http;

pub use http::HttpTransport;

use crate::error::AnalysisError;
use crate::types::AnalysisRequest;
use async_trait::async_trait;

/// Successful service reply, parsed as JSON but not yet interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl RawResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }
}

/// Issues exactly one outbound call per `submit`.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    async fn submit(
        &self,
        endpoint_path: &str,
        request: &AnalysisRequest,
    ) -> Result<RawResponse, AnalysisError>;
}
