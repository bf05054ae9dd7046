//! # qrshield
//!
//! A Rust library for judging whether a decoded QR payload is safe to act on.
//! It classifies an arbitrary decoded QR string, parses type-specific
//! structured data out of it (including QRIS/EMVCo tag-length-value payment
//! payloads), and runs an ordered set of fraud-detection heuristics that
//! produce a graded verdict.
//!
//! The library never touches pixels: QR image decoding is assumed already done
//! by an external decoder, which hands this engine a plain UTF-8 string. All
//! functions are pure and synchronous, so calls can run in parallel from any
//! number of threads without coordination.
//!
//! ## Features
//!
//! - **Payload Classification**: URL, QRIS, vCard, WiFi, mailto, SMS, geo,
//!   calendar event and plain-text detection with a fixed priority order
//! - **QRIS/EMVCo Parsing**: best-effort tag-length-value scanning, including
//!   the nested merchant account field
//! - **URL Security Checks**: HTTPS, shortener, suspicious TLD, typosquatting
//!   (Levenshtein distance against well-known domains), raw IP hosts and
//!   subdomain abuse
//! - **QRIS Security Checks**: EMVCo format, merchant-name keyword scan,
//!   NMID format, transaction amount and currency heuristics
//!
//! ## Quick Start
//!
//! ```rust
//! use qrshield::{analyze, classify, PayloadType, SecurityStatus};
//!
//! let decoded = classify("http://bit.ly/free-promo");
//! assert_eq!(decoded.payload_type, PayloadType::Url);
//!
//! let verdict = analyze(&decoded);
//! assert_eq!(verdict.overall, SecurityStatus::Danger);
//! for check in &verdict.checks {
//!     println!("[{:?}] {}: {}", check.status, check.name, check.message);
//! }
//! ```
//!
//! ## Verdicts
//!
//! Every analysis produces a [`SecurityAnalysisResult`]: an ordered list of
//! [`SecurityCheck`]s plus an overall [`SecurityStatus`] that is always the
//! maximum severity among the checks (`Safe < Warning < Danger`). There are no
//! fatal errors anywhere in the pipeline; malformed or truncated payloads
//! degrade to partial classifications and a best-effort verdict rather than an
//! error value.

pub mod analyzer;
pub mod classifier;

pub use analyzer::{
    analyze, analyze_qris, analyze_url, SecurityAnalysisResult, SecurityCheck, SecurityStatus,
};
pub use classifier::{classify, DecodedPayload, PayloadData, PayloadType, QrisData};
