//! # flood-risk-client
//!
//! 洪水风险分析客户端：校验用户输入，调用远程推理服务，并驱动分析会话状态。
//!
//! Analysis-request orchestrator for a remote flood-risk inference service.
//!
//! ## Overview
//!
//! A user asks for a flood-risk assessment either by entering coordinates or by
//! uploading a terrain photo. This crate validates that input, builds the request for
//! the matching endpoint, sends it, normalizes the reply into an [`AnalysisResult`],
//! and keeps an [`AnalysisSession`] that a UI renders from.
//!
//! ```text
//! RawInput ─▶ validation ─▶ client::request ─▶ transport ─▶ client::normalize ─▶ session
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flood_risk_client::{AnalysisOrchestrator, RawInput, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> flood_risk_client::Result<()> {
//!     let orchestrator = AnalysisOrchestrator::builder().build()?;
//!
//!     match orchestrator.submit(RawInput::coordinates("29.76", "-95.37")).await {
//!         SubmitOutcome::Settled(session) => {
//!             if let Some(result) = session.last_result {
//!                 println!("{}: {}", result.risk_level, result.description);
//!             } else if let Some(err) = session.last_error {
//!                 eprintln!("{}", err.user_message());
//!             }
//!         }
//!         SubmitOutcome::Rejected => {}
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`validation`] | Per-modality input checks |
//! | [`client`] | Request building, normalization, orchestrator |
//! | [`session`] | Pure session state machine |
//! | [`transport`] | HTTP inference client |
//! | [`config`] | Service configuration |
//! | [`types`] | Request and result types |

pub mod client;
pub mod config;
pub mod session;
pub mod transport;
pub mod types;
pub mod validation;

pub use client::{AnalysisOrchestrator, OrchestratorBuilder, SubmitOutcome};
pub use config::ServiceConfig;
pub use session::{AnalysisSession, SessionStatus};
pub use types::{AnalysisRequest, AnalysisResult, Modality, RiskLevel};
pub use validation::{ImageFile, RawInput};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{AnalysisError, Error, ValidationError};
