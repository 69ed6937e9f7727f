use super::{AnalysisSession, Effect, Event, SessionStatus};
use crate::client::request;
use crate::error::AnalysisError;
use crate::validation;
use tracing::debug;

/// Apply `event` to `session` and return the effect to perform.
///
/// Rejected and discarded events leave `session` untouched.
pub fn transition(session: &mut AnalysisSession, event: Event) -> Effect {
    match event {
        Event::Submit(input) => {
            if session.status.is_busy() {
                debug!(status = ?session.status, "Submission rejected: request already in flight");
                return Effect::Rejected;
            }

            // Idle, or implicit reset from a terminal state.
            session.generation += 1;
            session.status = SessionStatus::Validating;
            session.active_modality = Some(input.modality());
            session.last_result = None;
            session.last_error = None;

            match validation::validate(input) {
                Ok(validated) => {
                    session.status = SessionStatus::Submitting;
                    Effect::Dispatch {
                        generation: session.generation,
                        request: request::build(validated),
                    }
                }
                Err(err) => {
                    let err = AnalysisError::from(err);
                    session.status = SessionStatus::Failed;
                    session.last_error = Some(err.clone());
                    Effect::Failed(err)
                }
            }
        }
        Event::Completed {
            generation,
            outcome,
        } => {
            if session.status != SessionStatus::Submitting || generation != session.generation {
                debug!(
                    generation,
                    current = session.generation,
                    "Discarding completion for superseded request"
                );
                return Effect::Discarded;
            }
            match outcome {
                Ok(result) => {
                    session.last_error = None;
                    session.last_result = Some(result);
                    session.status = SessionStatus::Succeeded;
                }
                Err(err) => {
                    session.last_result = None;
                    session.last_error = Some(err);
                    session.status = SessionStatus::Failed;
                }
            }
            Effect::Settled
        }
        Event::Reset => {
            if session.status.is_busy() {
                return Effect::Rejected;
            }
            session.status = SessionStatus::Idle;
            session.active_modality = None;
            session.last_result = None;
            session.last_error = None;
            Effect::None
        }
    }
}
