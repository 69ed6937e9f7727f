//! 输入校验：在任何网络请求之前检查用户输入。
//!
//! Input validation for both modalities. Pure functions, no I/O.

use crate::error::ValidationError;
use crate::types::Modality;
use bytes::Bytes;

/// Upper bound on the declared image size (10 MiB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A file as handed over by the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub bytes: Bytes,
    /// Media type declared by the picker, e.g. `image/png`.
    pub mime_type: String,
    /// Size declared by the picker.
    pub size_bytes: u64,
    pub file_name: Option<String>,
}

impl ImageFile {
    /// Build from an in-memory buffer; the declared size is the buffer length.
    pub fn new(bytes: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        let bytes = bytes.into();
        Self {
            size_bytes: bytes.len() as u64,
            bytes,
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_declared_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }
}

/// Raw user input, exactly as the input surfaces provide it.
///
/// Coordinates arrive as text from numeric fields; `None` means the field was left empty.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Coordinates {
        latitude: Option<String>,
        longitude: Option<String>,
    },
    Image(Option<ImageFile>),
}

impl RawInput {
    pub fn coordinates(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        RawInput::Coordinates {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
        }
    }

    pub fn image(file: ImageFile) -> Self {
        RawInput::Image(Some(file))
    }

    pub fn modality(&self) -> Modality {
        match self {
            RawInput::Coordinates { .. } => Modality::Coordinates,
            RawInput::Image(_) => Modality::Image,
        }
    }
}

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedInput {
    Coordinates { latitude: f64, longitude: f64 },
    Image(ImageFile),
}

/// Validate raw input for its modality.
///
/// Latitude is checked before longitude, and for images the media type is checked
/// before the size.
pub fn validate(input: RawInput) -> Result<ValidatedInput, ValidationError> {
    match input {
        RawInput::Coordinates {
            latitude,
            longitude,
        } => {
            let latitude = parse_coordinate("latitude", latitude.as_deref(), LATITUDE_RANGE)?;
            let longitude = parse_coordinate("longitude", longitude.as_deref(), LONGITUDE_RANGE)?;
            Ok(ValidatedInput::Coordinates {
                latitude,
                longitude,
            })
        }
        RawInput::Image(file) => {
            let file = file.ok_or_else(|| ValidationError::new("image", "missing"))?;
            if !file.mime_type.starts_with("image/") {
                return Err(ValidationError::new("image", "invalid type"));
            }
            if file.size_bytes > MAX_IMAGE_BYTES {
                return Err(ValidationError::new("image", "too large"));
            }
            Ok(ValidatedInput::Image(file))
        }
    }
}

fn parse_coordinate(
    field: &'static str,
    raw: Option<&str>,
    (min, max): (f64, f64),
) -> Result<f64, ValidationError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ValidationError::new(field, "missing"))?;
    let value: f64 = raw
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValidationError::new(field, "not a number"))?;
    if !(min..=max).contains(&value) {
        return Err(ValidationError::new(field, "out of range"));
    }
    Ok(value)
}
