//! Outbound analysis payloads.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The two supported analysis paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Coordinates,
    Image,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coordinates => "coordinates",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body for `POST /api/analyze/coordinates`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// Multipart upload for `POST /api/analyze/image`.
///
/// `size_bytes` is the size the picker declared, which is what validation checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub bytes: Bytes,
    pub mime_type: String,
    pub size_bytes: u64,
    pub file_name: String,
}

/// Transport-ready request. Exactly one variant per submission.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Coordinates(CoordinateRequest),
    Image(ImageRequest),
}

impl AnalysisRequest {
    pub fn modality(&self) -> Modality {
        match self {
            AnalysisRequest::Coordinates(_) => Modality::Coordinates,
            AnalysisRequest::Image(_) => Modality::Image,
        }
    }
}
