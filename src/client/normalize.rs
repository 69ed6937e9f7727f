//! 响应归一化：将服务的原始 JSON 映射为规范的分析结果。
//!
//! Response normalization.
//!
//! The service reply is untrusted: every field is checked individually and any
//! mismatch is reported as [`AnalysisError::Unexpected`] instead of being guessed.

use crate::error::AnalysisError;
use crate::transport::RawResponse;
use crate::types::{AnalysisResult, RiskLevel};
use serde_json::{Map, Value};

pub const FIELD_RISK_LEVEL: &str = "risk_level";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_RECOMMENDATIONS: &str = "recommendations";
pub const FIELD_ELEVATION: &str = "elevation";
pub const FIELD_DISTANCE_FROM_WATER: &str = "distance_from_water";
pub const FIELD_AI_ANALYSIS: &str = "ai_analysis";

pub fn normalize(raw: RawResponse) -> Result<AnalysisResult, AnalysisError> {
    let mut body = match raw.body {
        Value::Object(map) => map,
        other => {
            return Err(AnalysisError::unexpected(format!(
                "expected a JSON object, got {}",
                json_type(&other)
            )))
        }
    };

    let risk_level = match body.remove(FIELD_RISK_LEVEL) {
        Some(Value::String(s)) => RiskLevel::from_wire(&s).ok_or_else(|| {
            AnalysisError::unexpected(format!("unknown {} '{}'", FIELD_RISK_LEVEL, s))
        })?,
        other => return Err(mismatch(FIELD_RISK_LEVEL, "a string", other.as_ref())),
    };

    let description = match body.remove(FIELD_DESCRIPTION) {
        Some(Value::String(s)) => s,
        other => return Err(mismatch(FIELD_DESCRIPTION, "a string", other.as_ref())),
    };

    let recommendations = recommendations(&mut body)?;
    let elevation_meters = number(&body, FIELD_ELEVATION)?;
    let distance_from_water_meters = number(&body, FIELD_DISTANCE_FROM_WATER)?;

    let ai_narrative = match body.remove(FIELD_AI_ANALYSIS) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => return Err(mismatch(FIELD_AI_ANALYSIS, "a string", Some(&other))),
    };

    Ok(AnalysisResult {
        risk_level,
        description,
        recommendations,
        elevation_meters,
        distance_from_water_meters,
        ai_narrative,
    })
}

// Missing or null is an empty list.
fn recommendations(body: &mut Map<String, Value>) -> Result<Vec<String>, AnalysisError> {
    match body.remove(FIELD_RECOMMENDATIONS) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s),
                other => Err(AnalysisError::unexpected(format!(
                    "{}[{}] must be a string, got {}",
                    FIELD_RECOMMENDATIONS,
                    i,
                    json_type(&other)
                ))),
            })
            .collect(),
        Some(other) => Err(mismatch(FIELD_RECOMMENDATIONS, "an array", Some(&other))),
    }
}

fn number(body: &Map<String, Value>, field: &str) -> Result<f64, AnalysisError> {
    body.get(field)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .ok_or_else(|| mismatch(field, "a number", body.get(field)))
}

fn mismatch(field: &str, expected: &str, got: Option<&Value>) -> AnalysisError {
    match got {
        None => AnalysisError::unexpected(format!("missing field '{}'", field)),
        Some(v) => AnalysisError::unexpected(format!(
            "field '{}' must be {}, got {}",
            field,
            expected,
            json_type(v)
        )),
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
