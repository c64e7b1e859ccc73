//! Fee-driven mode: reverse-compute the claim from a known contingency fee.
//!
//! Contract:
//! - Preconditions `0 < fee <= FEE_CAP` and `0 <= ratio < 100`, checked in that
//!   order; the first failure is returned and nothing is computed.
//! - `z = fee / FEE_RATE`, `x = z / (1 - r)`, `y = x * r` with `r = ratio / 100`.
//! - The benefit ratio is recomputed from `z / x`, never taken as `100 - ratio`.
//! - No capping happens here: the fee is an input already bounded by the cap.

use tracing::{debug, instrument};

use sc_core::constants::{FEE_CAP, FEE_RATE};
use sc_core::{CalculationResult, MonetaryAmount, Mode, ValidationError, ValidationResult, WinRatio};

use crate::rules::{benefit_ratio, meets_threshold};

#[instrument(level = "debug")]
pub fn compute_from_fee(fee: MonetaryAmount, ratio: f64) -> ValidationResult<CalculationResult> {
    if fee.is_zero() {
        return Err(ValidationError::FeeNotPositive);
    }
    if fee.get() > FEE_CAP {
        return Err(ValidationError::FeeExceedsCap { fee: fee.get() });
    }
    let win_ratio = WinRatio::new(ratio)?;
    let r = win_ratio.fraction();

    let fee_f = fee.as_f64();
    let counterparty_benefit = fee_f / FEE_RATE;
    let total_amount = counterparty_benefit / (1.0 - r);
    let awarded_amount = total_amount * r;
    let benefit_ratio = benefit_ratio(counterparty_benefit, total_amount);
    let threshold_met = meets_threshold(benefit_ratio);

    debug!(total_amount, awarded_amount, counterparty_benefit, benefit_ratio, threshold_met, "fee-driven result");

    Ok(CalculationResult {
        mode: Mode::FeeDriven,
        win_ratio,
        total_amount,
        awarded_amount,
        counterparty_benefit,
        fee: fee_f,
        benefit_ratio,
        threshold_met,
        fee_cap: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(v: u64) -> MonetaryAmount { MonetaryAmount::new(v) }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn three_and_a_half_eok_at_fifty_percent() {
        let res = compute_from_fee(amt(350_000_000), 50.0).unwrap();
        assert_eq!(res.counterparty_benefit.round(), 11_666_666_667.0);
        assert_eq!(res.total_amount.round(), 23_333_333_333.0);
        assert_eq!(res.awarded_amount.round(), 11_666_666_667.0);
        assert!(close(res.benefit_ratio, 50.0));
        assert!(!res.threshold_met);
        assert_eq!(res.fee, 350_000_000.0);
        assert!(res.fee_cap.is_none());
    }

    #[test]
    fn zero_ratio_means_everything_is_benefit() {
        let res = compute_from_fee(amt(300_000_000), 0.0).unwrap();
        assert_eq!(res.awarded_amount, 0.0);
        assert_eq!(res.total_amount, res.counterparty_benefit);
        assert_eq!(res.benefit_ratio, 100.0);
        assert!(res.threshold_met);
    }

    #[test]
    fn forty_percent_sits_on_the_threshold() {
        let res = compute_from_fee(amt(300_000_000), 40.0).unwrap();
        assert_eq!(res.benefit_ratio, 60.0);
        assert!(res.threshold_met);

        let below = compute_from_fee(amt(300_000_000), 40.1).unwrap();
        assert!(below.benefit_ratio < 60.0);
        assert!(!below.threshold_met);
    }

    #[test]
    fn benefit_is_exactly_fee_over_rate() {
        let res = compute_from_fee(amt(123_000_000), 33.3).unwrap();
        assert_eq!(res.fee / FEE_RATE, res.counterparty_benefit);
    }

    #[test]
    fn cap_is_inclusive() {
        assert!(compute_from_fee(amt(FEE_CAP), 10.0).is_ok());
        assert_eq!(
            compute_from_fee(amt(500_000_001), 10.0),
            Err(ValidationError::FeeExceedsCap { fee: 500_000_001 })
        );
    }

    #[test]
    fn rejects_zero_fee_and_bad_ratio() {
        assert_eq!(compute_from_fee(amt(0), 10.0), Err(ValidationError::FeeNotPositive));
        assert_eq!(
            compute_from_fee(amt(100_000_000), 100.0),
            Err(ValidationError::RatioOutOfRange { ratio: 100.0 })
        );
        assert!(compute_from_fee(amt(100_000_000), -5.0).is_err());
    }

    #[test]
    fn fee_checked_before_ratio() {
        assert_eq!(
            compute_from_fee(amt(600_000_000), 100.0),
            Err(ValidationError::FeeExceedsCap { fee: 600_000_000 })
        );
    }
}
