use thiserror::Error;

/// A locally detected, user-correctable input problem.
///
/// `field` names the offending input (`"latitude"`, `"longitude"` or `"image"`),
/// `reason` is a short machine-friendly tag such as `"out of range"` or `"too large"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Message shown in the blocking dialog.
    pub fn user_message(&self) -> String {
        match (self.field.as_str(), self.reason.as_str()) {
            ("image", "missing") => "Please select an image first".to_string(),
            ("image", "invalid type") => "Please select a valid image file".to_string(),
            ("image", "too large") => "Image size must be less than 10MB".to_string(),
            (field, "missing") => format!("Please enter a {}", field),
            (field, "not a number") => format!("The {} must be a number", field),
            ("latitude", "out of range") => "Latitude must be between -90 and 90".to_string(),
            ("longitude", "out of range") => {
                "Longitude must be between -180 and 180".to_string()
            }
            (field, reason) => format!("Invalid {}: {}", field, reason),
        }
    }
}

/// Failure of a single analysis attempt.
///
/// This is the value stored in [`AnalysisSession::last_error`](crate::session::AnalysisSession),
/// so it only carries owned, cloneable data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {cause}")]
    Network { cause: String },

    #[error("Service error: HTTP {status_code}")]
    Service { status_code: u16 },

    #[error("Unexpected response: {detail}")]
    Unexpected { detail: String },
}

impl AnalysisError {
    pub fn network(cause: impl Into<String>) -> Self {
        AnalysisError::Network {
            cause: cause.into(),
        }
    }

    pub fn service(status_code: u16) -> Self {
        AnalysisError::Service { status_code }
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        AnalysisError::Unexpected {
            detail: detail.into(),
        }
    }

    /// Stable lowercase tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation(_) => "validation",
            AnalysisError::Network { .. } => "network",
            AnalysisError::Service { .. } => "service",
            AnalysisError::Unexpected { .. } => "unexpected",
        }
    }

    /// Single human-readable message for the blocking error dialog.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Validation(v) => v.user_message(),
            AnalysisError::Network { .. } => {
                "Could not reach the analysis service. Please check if the backend server is running."
                    .to_string()
            }
            AnalysisError::Service { status_code } => format!(
                "The analysis service returned an error (HTTP {}). Please try again later.",
                status_code
            ),
            AnalysisError::Unexpected { .. } => {
                "The analysis service returned a response that could not be understood."
                    .to_string()
            }
        }
    }
}

/// Unified error type for the crate.
///
/// Analysis failures and setup failures (configuration, I/O) are kept apart so that
/// only the former ever reach the session.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Configuration file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Analysis(AnalysisError::Validation(err))
    }
}
