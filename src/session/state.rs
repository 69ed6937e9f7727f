use crate::error::AnalysisError;
use crate::types::{AnalysisResult, Modality};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SessionStatus {
    /// A request is being validated or is on the wire.
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionStatus::Validating | SessionStatus::Submitting)
    }

    /// `Succeeded` or `Failed`; only a new submission or a reset leaves it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Succeeded | SessionStatus::Failed)
    }
}

/// Everything the UI needs to render the analysis panel.
///
/// `last_result` and `last_error` are never both set. `generation` increases by one
/// for every accepted submission and tags the request dispatched for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisSession {
    pub status: SessionStatus,
    pub active_modality: Option<Modality>,
    pub last_result: Option<AnalysisResult>,
    pub last_error: Option<AnalysisError>,
    pub generation: u64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }
}
