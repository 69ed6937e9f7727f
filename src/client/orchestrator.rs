//! Drives the session reducer and performs its effects.

use super::normalize::normalize;
use crate::config::ServiceConfig;
use crate::session::{transition, AnalysisSession, Effect, Event};
use crate::transport::InferenceTransport;
use crate::validation::RawInput;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

/// Result of a call to [`AnalysisOrchestrator::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The attempt reached a terminal state; carries the session as it was then.
    Settled(AnalysisSession),
    /// Another request was in flight; nothing changed.
    Rejected,
}

impl SubmitOutcome {
    pub fn session(&self) -> Option<&AnalysisSession> {
        match self {
            SubmitOutcome::Settled(s) => Some(s),
            SubmitOutcome::Rejected => None,
        }
    }
}

/// Owns the analysis session and sequences validate → build → send → normalize.
///
/// Cheap to share behind an `Arc`. The session lock is never held across the network call.
pub struct AnalysisOrchestrator {
    pub(crate) config: ServiceConfig,
    pub(crate) transport: Arc<dyn InferenceTransport>,
    pub(crate) session: Mutex<AnalysisSession>,
}

impl AnalysisOrchestrator {
    pub fn builder() -> super::OrchestratorBuilder {
        super::OrchestratorBuilder::new()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Snapshot of the current session for rendering.
    pub fn session(&self) -> AnalysisSession {
        self.lock().clone()
    }

    /// Run one analysis attempt.
    ///
    /// Rejected without side effects while another submission is validating or in flight.
    pub async fn submit(&self, input: RawInput) -> SubmitOutcome {
        let modality = input.modality();
        let (effect, snapshot) = self.apply(Event::Submit(input));

        let (generation, request) = match effect {
            Effect::Dispatch {
                generation,
                request,
            } => (generation, request),
            Effect::Failed(err) => {
                info!(%modality, error = %err, "Analysis input rejected by validation");
                return SubmitOutcome::Settled(snapshot);
            }
            Effect::Rejected => return SubmitOutcome::Rejected,
            other => {
                warn!(?other, "Unexpected effect for submission");
                return SubmitOutcome::Rejected;
            }
        };

        let endpoint = self.config.endpoint_for(modality);
        let outcome = self
            .transport
            .submit(endpoint, &request)
            .await
            .and_then(normalize);

        match &outcome {
            Ok(result) => info!(
                %modality,
                generation,
                risk_level = %result.risk_level,
                "Analysis succeeded"
            ),
            Err(err) => warn!(
                %modality,
                generation,
                kind = err.kind(),
                error = %err,
                "Analysis failed"
            ),
        }

        match self.apply(Event::Completed {
            generation,
            outcome,
        }) {
            (Effect::Settled, snapshot) => SubmitOutcome::Settled(snapshot),
            // Busy sessions reject Submit and Reset, so the generation still matches here.
            (effect, snapshot) => {
                warn!(?effect, generation, "Completion not applied to session");
                SubmitOutcome::Settled(snapshot)
            }
        }
    }

    /// Return a terminal session to `Idle`. Returns `false` while a request is in flight.
    pub fn reset(&self) -> bool {
        let (effect, _) = self.apply(Event::Reset);
        effect != Effect::Rejected
    }

    fn apply(&self, event: Event) -> (Effect, AnalysisSession) {
        let mut session = self.lock();
        let effect = transition(&mut session, event);
        (effect, session.clone())
    }

    fn lock(&self) -> MutexGuard<'_, AnalysisSession> {
        // The reducer never panics midway, so a poisoned session is still consistent.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
