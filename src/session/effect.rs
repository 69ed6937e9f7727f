use crate::error::AnalysisError;
use crate::types::AnalysisRequest;

/// What the driver must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send `request`, then feed the outcome back as `Event::Completed { generation, .. }`.
    Dispatch {
        generation: u64,
        request: AnalysisRequest,
    },
    /// Event ignored; the session is unchanged.
    Rejected,
    /// Validation failed before anything was sent.
    Failed(AnalysisError),
    /// The in-flight request finished and the session is terminal.
    Settled,
    /// A completion for a superseded generation arrived and was dropped.
    Discarded,
    /// State changed, nothing else to do.
    None,
}
