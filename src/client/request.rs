//! Turns validated input into a transport-ready [`AnalysisRequest`].

use crate::types::{AnalysisRequest, CoordinateRequest, ImageRequest};
use crate::validation::ValidatedInput;

/// File name sent in the multipart part when the picker supplied none.
pub const DEFAULT_IMAGE_FILE_NAME: &str = "upload";

pub fn build(validated: ValidatedInput) -> AnalysisRequest {
    match validated {
        ValidatedInput::Coordinates {
            latitude,
            longitude,
        } => AnalysisRequest::Coordinates(CoordinateRequest {
            latitude,
            longitude,
        }),
        ValidatedInput::Image(file) => AnalysisRequest::Image(ImageRequest {
            bytes: file.bytes,
            mime_type: file.mime_type,
            size_bytes: file.size_bytes,
            file_name: file
                .file_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_FILE_NAME.to_string()),
        }),
    }
}
