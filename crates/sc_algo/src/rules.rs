//! Rules shared by both modes: the fee cap, the benefit ratio and the
//! qualifying threshold.

use sc_core::constants::{FEE_CAP, THRESHOLD_RATIO};

/// Clamp a theoretical fee to the cap. Returns `(payable, capped)`.
///
/// A fee exactly at the cap is not capped.
#[inline]
pub fn apply_fee_cap(fee_raw: f64) -> (f64, bool) {
    let cap = FEE_CAP as f64;
    let capped = fee_raw > cap;
    (fee_raw.min(cap), capped)
}

/// `benefit / total * 100`, with `0` for a zero total.
#[inline]
pub fn benefit_ratio(benefit: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        benefit / total * 100.0
    }
}

/// Inclusive: exactly 60% qualifies.
#[inline]
pub fn meets_threshold(benefit_ratio: f64) -> bool {
    benefit_ratio >= THRESHOLD_RATIO
}
