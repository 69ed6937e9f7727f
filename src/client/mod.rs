//! 分析请求编排：请求构建、响应归一化与会话驱动。
//!
//! Analysis client.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`request`] | Validated input → [`AnalysisRequest`](crate::types::AnalysisRequest) |
//! | [`normalize`] | Raw service JSON → [`AnalysisResult`](crate::types::AnalysisResult) |
//! | [`AnalysisOrchestrator`] | Single-flight driver of the session state machine |

mod builder;
pub mod normalize;
mod orchestrator;
pub mod request;

pub use builder::OrchestratorBuilder;
pub use orchestrator::{AnalysisOrchestrator, SubmitOutcome};
