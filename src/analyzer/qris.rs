use super::{SecurityAnalysisResult, SecurityCheck, SecurityStatus};
use crate::classifier::QrisData;

// QRIS security analyzer
//------------------------------------------------------------------------------

/// Words scam merchants like to put in their registered name.
static SUSPICIOUS_KEYWORDS: [&str; 6] =
    ["official", "promo", "gratis", "bonus", "hadiah", "menang"];

/// Transaction amounts above this (in rupiah) get a warning.
const LARGE_AMOUNT_THRESHOLD: f64 = 1_000_000.0;

/// Runs the ordered QRIS heuristics over the parsed merchant fields.
///
/// Only the EMVCo format check always runs; the others are emitted solely
/// when their field is present, so a sparse payload may yield as little as a
/// single check. Absence of an optional field is never an error.
pub fn analyze_qris(qris: &QrisData) -> SecurityAnalysisResult {
    let mut checks = Vec::new();

    if qris.merchant_pan.is_some() && qris.merchant_id.is_some() {
        checks.push(SecurityCheck::new(
            "Valid QRIS format",
            SecurityStatus::Safe,
            "Payload follows the EMVCo QRIS standard",
        ));
    } else {
        checks.push(SecurityCheck::new(
            "Invalid QRIS format",
            SecurityStatus::Danger,
            "Payload does not follow the QRIS standard",
        ));
    }

    if let Some(name) = &qris.merchant_name {
        let lowered = name.to_lowercase();
        if SUSPICIOUS_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
            checks.push(SecurityCheck::new(
                "Suspicious merchant name",
                SecurityStatus::Warning,
                "Merchant name contains words frequently used by scammers",
            ));
        } else {
            checks.push(SecurityCheck::new(
                "Merchant name verified",
                SecurityStatus::Safe,
                "Merchant name contains no suspicious words",
            ));
        }
    }

    if let Some(nmid) = qris.nmid.as_ref().or(qris.merchant_id.as_ref()) {
        if nmid.starts_with("ID") && nmid.chars().count() >= 15 {
            checks.push(SecurityCheck::new(
                "NMID verified",
                SecurityStatus::Safe,
                "NMID has a valid format",
            ));
        } else {
            checks.push(SecurityCheck::new(
                "Invalid NMID",
                SecurityStatus::Warning,
                "NMID format does not follow the standard",
            ));
        }
    }

    if let Some(amount) = qris.transaction_amount.as_ref().and_then(|a| a.parse::<f64>().ok()) {
        if amount > LARGE_AMOUNT_THRESHOLD {
            checks.push(SecurityCheck::new(
                "Large transaction amount",
                SecurityStatus::Warning,
                format!(
                    "Amount of Rp {} is quite large, make sure the merchant is genuine",
                    format_idr(amount)
                ),
            ));
        }
    }

    if let Some(currency) = &qris.transaction_currency {
        if currency == "360" {
            checks.push(SecurityCheck::new(
                "IDR currency",
                SecurityStatus::Safe,
                "Transaction is in Indonesian rupiah",
            ));
        } else {
            checks.push(SecurityCheck::new(
                "Non-IDR currency",
                SecurityStatus::Warning,
                "QRIS uses a currency other than rupiah",
            ));
        }
    }

    SecurityAnalysisResult::from_checks(checks)
}

/// Indonesian-locale thousands grouping ("2.000.000"). Amounts past the large
/// threshold are whole rupiah in practice, so the fraction is dropped.
fn format_idr(amount: f64) -> String {
    let whole = amount.trunc().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
