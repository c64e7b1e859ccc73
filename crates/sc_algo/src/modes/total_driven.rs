//! Total-driven mode: split a known claim and derive the (capped) fee.

use tracing::{debug, instrument};

use sc_core::constants::FEE_RATE;
use sc_core::{CalculationResult, FeeCapOutcome, MonetaryAmount, Mode, ValidationError, ValidationResult, WinRatio};

use crate::rules::{apply_fee_cap, benefit_ratio, meets_threshold};

/// `y = x * r`, `z = x * (1 - r)`, `fee = min(z * FEE_RATE, FEE_CAP)`.
///
/// Both the theoretical and the payable fee are kept in the result.
#[instrument(level = "debug")]
pub fn compute_from_total(total: MonetaryAmount, ratio: f64) -> ValidationResult<CalculationResult> {
    if total.is_zero() {
        return Err(ValidationError::TotalNotPositive);
    }
    let win_ratio = WinRatio::new(ratio)?;
    let r = win_ratio.fraction();

    let total_amount = total.as_f64();
    let awarded_amount = total_amount * r;
    let counterparty_benefit = total_amount * (1.0 - r);
    let fee_raw = counterparty_benefit * FEE_RATE;
    let (fee, capped) = apply_fee_cap(fee_raw);
    let benefit_ratio = benefit_ratio(counterparty_benefit, total_amount);
    let threshold_met = meets_threshold(benefit_ratio);

    if capped {
        debug!(fee_raw, fee, "fee capped");
    }
    debug!(awarded_amount, counterparty_benefit, benefit_ratio, threshold_met, "total-driven result");

    Ok(CalculationResult {
        mode: Mode::TotalDriven,
        win_ratio,
        total_amount,
        awarded_amount,
        counterparty_benefit,
        fee,
        benefit_ratio,
        threshold_met,
        fee_cap: Some(FeeCapOutcome { fee_raw, capped }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::constants::FEE_CAP;

    fn amt(v: u64) -> MonetaryAmount { MonetaryAmount::new(v) }

    #[test]
    fn ten_eok_at_twenty_percent() {
        let res = compute_from_total(amt(1_000_000_000), 20.0).unwrap();
        assert_eq!(res.awarded_amount, 200_000_000.0);
        assert_eq!(res.counterparty_benefit, 800_000_000.0);
        assert_eq!(res.fee_raw(), Some(24_000_000.0));
        assert!(!res.fee_capped());
        assert_eq!(res.fee, 24_000_000.0);
        assert_eq!(res.benefit_ratio, 80.0);
        assert!(res.threshold_met);
    }

    #[test]
    fn cap_applies_one_unit_past_the_boundary() {
        // z * 0.03 just below the cap
        let under = compute_from_total(amt(16_666_666_666), 0.0).unwrap();
        assert!(!under.fee_capped());
        assert!(under.fee < FEE_CAP as f64);

        let over = compute_from_total(amt(16_666_666_667), 0.0).unwrap();
        assert!(over.fee_capped());
        assert_eq!(over.fee, FEE_CAP as f64);
        assert!(over.fee_raw().unwrap() > FEE_CAP as f64);
    }

    #[test]
    fn capped_result_keeps_theoretical_fee() {
        // 999억 9천만, nothing awarded: fee_raw ≈ 29.997억
        let res = compute_from_total(amt(99_990_000_000), 0.0).unwrap();
        assert!(res.fee_capped());
        assert_eq!(res.fee, 500_000_000.0);
        let raw = res.fee_raw().unwrap();
        assert!((raw - 2_999_700_000.0).abs() < 1e-3);
        assert!((res.cap_excess() - (raw - 500_000_000.0)).abs() < 1e-9);
    }

    #[test]
    fn forty_percent_meets_threshold_exactly() {
        let res = compute_from_total(amt(1_000_000_000), 40.0).unwrap();
        assert_eq!(res.benefit_ratio, 60.0);
        assert!(res.threshold_met);

        let below = compute_from_total(amt(1_000_000_000), 40.1).unwrap();
        assert!(!below.threshold_met);
    }

    #[test]
    fn rejects_zero_total_and_bad_ratio() {
        assert_eq!(compute_from_total(amt(0), 10.0), Err(ValidationError::TotalNotPositive));
        assert!(compute_from_total(amt(1_000_000_000), 100.0).is_err());
        assert!(compute_from_total(amt(1_000_000_000), f64::NAN).is_err());
    }
}
