use crate::error::AnalysisError;
use crate::types::AnalysisResult;
use crate::validation::RawInput;

/// Inputs to the session reducer.
#[derive(Debug, Clone)]
pub enum Event {
    /// User submitted input from one of the input surfaces.
    Submit(RawInput),
    /// The dispatched request for `generation` finished.
    Completed {
        generation: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
    /// Return a terminal session to `Idle`.
    Reset,
}
