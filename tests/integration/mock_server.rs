//! Mock HTTP server setup for integration tests

use flood_risk_client::transport::HttpTransport;
use flood_risk_client::{AnalysisOrchestrator, ServiceConfig};
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const IMAGE_PATH: &str = "/api/analyze/image";
pub const COORDINATES_PATH: &str = "/api/analyze/coordinates";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn config(&self) -> ServiceConfig {
        ServiceConfig::default()
            .with_base_url(&self.base_url)
            .expect("mock server config")
    }

    pub fn transport(&self) -> HttpTransport {
        HttpTransport::new(self.config()).expect("transport")
    }

    /// Orchestrator pointed at the mock server through `base_url_override`.
    pub fn orchestrator(&self) -> AnalysisOrchestrator {
        AnalysisOrchestrator::builder()
            .config(ServiceConfig::default())
            .base_url_override(&self.base_url)
            .build()
            .expect("orchestrator")
    }

    /// Create a mock for a JSON response on `path`
    pub async fn mock_json_response(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock that only matches a multipart upload carrying the `file` field
    pub async fn mock_image_upload(&mut self, file_name: &str, body: &str) -> Mock {
        self.server
            .mock("POST", IMAGE_PATH)
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=.+".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(format!(
                    r#"name="file"; filename="{}""#,
                    regex::escape(file_name)
                )),
                Matcher::Regex("(?i)content-type: image/png".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// Body the service returns for a typical successful analysis.
pub fn success_body(risk_level: &str) -> String {
    serde_json::json!({
        "risk_level": risk_level,
        "description": "Terrain sits in a low-lying floodplain.",
        "recommendations": ["Purchase flood insurance", "Elevate electrical systems"],
        "elevation": 4.2,
        "distance_from_water": 85,
        "ai_analysis": "Visible standing water near the riverbank.",
        "timestamp": "2025-01-01T00:00:00"
    })
    .to_string()
}
