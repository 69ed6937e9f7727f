//! 类型模块：洪水风险分析请求与结果的核心数据类型。
//!
//! # Types Module
//!
//! Strongly-typed representations of what goes over the wire and what the UI renders.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AnalysisRequest`] | Outbound payload, one variant per modality |
//! | [`Modality`] | Which analysis path a submission uses |
//! | [`RiskLevel`] | Ordered flood-risk level |
//! | [`AnalysisResult`] | Canonical, normalized service result |
//!
//! ## Example
//!
//! ```rust
//! use flood_risk_client::types::{AnalysisRequest, CoordinateRequest, Modality, RiskLevel};
//!
//! let request = AnalysisRequest::Coordinates(CoordinateRequest {
//!     latitude: 29.76,
//!     longitude: -95.37,
//! });
//! assert_eq!(request.modality(), Modality::Coordinates);
//! assert!(RiskLevel::VeryHigh > RiskLevel::Medium);
//! ```

pub mod request;
pub mod result;

pub use request::{AnalysisRequest, CoordinateRequest, ImageRequest, Modality};
pub use result::{AnalysisResult, RiskLevel};
