use super::{InferenceTransport, RawResponse};
use crate::config::ServiceConfig;
use crate::error::AnalysisError;
use crate::types::{AnalysisRequest, ImageRequest};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Proxy;
use tracing::{debug, warn};

/// Multipart field carrying the image content.
pub const IMAGE_FIELD: &str = "file";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// reqwest-backed inference client.
pub struct HttpTransport {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpTransport {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        // No timeout unless one was configured explicitly.
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = config.proxy_url() {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration(format!("Invalid proxy URL '{}': {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn image_form(image: &ImageRequest) -> std::result::Result<Form, AnalysisError> {
        let part = Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| {
                AnalysisError::unexpected(format!(
                    "Invalid media type '{}': {}",
                    image.mime_type, e
                ))
            })?;
        Ok(Form::new().part(IMAGE_FIELD, part))
    }
}

#[async_trait]
impl InferenceTransport for HttpTransport {
    async fn submit(
        &self,
        endpoint_path: &str,
        request: &AnalysisRequest,
    ) -> std::result::Result<RawResponse, AnalysisError> {
        let url = self.config.url_for(endpoint_path);
        let request_id = uuid::Uuid::new_v4().to_string();

        let builder = self
            .client
            .post(&url)
            .header(REQUEST_ID_HEADER, &request_id);
        let builder = match request {
            AnalysisRequest::Coordinates(coords) => builder.json(coords),
            AnalysisRequest::Image(image) => builder.multipart(Self::image_form(image)?),
        };

        debug!(
            %url,
            request_id = %request_id,
            modality = %request.modality(),
            "Submitting analysis request"
        );

        let response = builder.send().await.map_err(|e| {
            warn!(request_id = %request_id, error = %e, "Analysis request failed in transport");
            AnalysisError::network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(request_id = %request_id, status = status.as_u16(), "Analysis service returned an error status");
            return Err(AnalysisError::service(status.as_u16()));
        }

        // An interrupted body is still a transport failure.
        let body = response.bytes().await.map_err(|e| {
            warn!(request_id = %request_id, error = %e, "Failed to read analysis response body");
            AnalysisError::network(format!("Failed to read response body: {}", e))
        })?;

        let json: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| AnalysisError::unexpected(format!("Response is not valid JSON: {}", e)))?;

        debug!(request_id = %request_id, status = status.as_u16(), "Analysis response received");
        Ok(RawResponse::new(status.as_u16(), json))
    }
}
