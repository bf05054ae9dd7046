pub mod qris;
pub mod typosquat;
pub mod url;

pub use qris::analyze_qris;
pub use url::analyze_url;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::{DecodedPayload, PayloadData};

// Security status
//------------------------------------------------------------------------------

/// Graded verdict severity. The ordering `Safe < Warning < Danger` is load
/// bearing: the overall status of an analysis is the maximum severity among
/// its checks.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SecurityStatus {
    Safe,
    Warning,
    Danger,
}

// Security check
//------------------------------------------------------------------------------

/// A single heuristic's outcome. `name` is a short label, `message` the
/// user-facing detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityCheck {
    pub name: String,
    pub status: SecurityStatus,
    pub message: String,
}

impl SecurityCheck {
    pub fn new(
        name: impl Into<String>,
        status: SecurityStatus,
        message: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), status, message: message.into() }
    }
}

// Analysis result
//------------------------------------------------------------------------------

/// An ordered sequence of checks plus the aggregate verdict. Constructed only
/// through [`SecurityAnalysisResult::from_checks`], so `overall` always equals
/// the maximum severity among `checks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAnalysisResult {
    pub overall: SecurityStatus,
    pub checks: Vec<SecurityCheck>,
}

impl SecurityAnalysisResult {
    pub fn from_checks(checks: Vec<SecurityCheck>) -> Self {
        let overall =
            checks.iter().map(|c| c.status).max().unwrap_or(SecurityStatus::Safe);
        Self { overall, checks }
    }
}

// Verdict dispatch
//------------------------------------------------------------------------------

/// Runs the security analysis matching the payload type: URLs go through the
/// URL heuristics (on the normalized url field), QRIS payloads through the
/// QRIS heuristics, and every other type gets a single informational Safe
/// check naming the detected type.
pub fn analyze(payload: &DecodedPayload) -> SecurityAnalysisResult {
    let result = match &payload.data {
        PayloadData::Url { url } => analyze_url(url),
        PayloadData::Qris(qris) => analyze_qris(qris),
        _ => SecurityAnalysisResult::from_checks(vec![SecurityCheck::new(
            "QR code detected",
            SecurityStatus::Safe,
            format!("Type: {}", payload.payload_type),
        )]),
    };

    debug!(
        "analyzed {} payload: {:?} across {} checks",
        payload.payload_type,
        result.overall,
        result.checks.len()
    );

    result
}
