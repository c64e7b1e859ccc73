//! Request/result value records. Built fresh per calculation, never stored.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::amount::MonetaryAmount;
use crate::constants::{FEE_MAJOR_MAX, TOTAL_MAJOR_MAX};
use crate::ratio::WinRatio;

/// Which quantity is the known input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    #[cfg_attr(feature = "serde", serde(rename = "fee"))]
    FeeDriven,
    #[cfg_attr(feature = "serde", serde(rename = "total"))]
    TotalDriven,
}

impl Mode {
    /// Entry ceiling (in 억) of this mode's amount field.
    pub const fn major_max(self) -> u32 {
        match self {
            Mode::FeeDriven => FEE_MAJOR_MAX,
            Mode::TotalDriven => TOTAL_MAJOR_MAX,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::FeeDriven => "fee",
            Mode::TotalDriven => "total",
        }
    }
}

/// One calculation, as read from the current form state.
///
/// `ratio` is the raw percent from the form; the engine validates it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode"))]
pub enum CalculationRequest {
    #[cfg_attr(feature = "serde", serde(rename = "fee"))]
    FeeDriven { fee: MonetaryAmount, ratio: f64 },
    #[cfg_attr(feature = "serde", serde(rename = "total"))]
    TotalDriven { total: MonetaryAmount, ratio: f64 },
}

impl CalculationRequest {
    pub fn mode(&self) -> Mode {
        match self {
            CalculationRequest::FeeDriven { .. } => Mode::FeeDriven,
            CalculationRequest::TotalDriven { .. } => Mode::TotalDriven,
        }
    }

    /// The known input amount (fee or total).
    pub fn amount(&self) -> MonetaryAmount {
        match *self {
            CalculationRequest::FeeDriven { fee, .. } => fee,
            CalculationRequest::TotalDriven { total, .. } => total,
        }
    }

    pub fn ratio(&self) -> f64 {
        match *self {
            CalculationRequest::FeeDriven { ratio, .. } | CalculationRequest::TotalDriven { ratio, .. } => ratio,
        }
    }
}

/// Fee cap bookkeeping (total-driven mode only).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeeCapOutcome {
    /// Theoretical fee before the cap.
    pub fee_raw: f64,
    /// `fee_raw > FEE_CAP`.
    pub capped: bool,
}

/// Derived figures. Amounts are full-precision reals; display rounding is the
/// presenter's job.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationResult {
    pub mode: Mode,
    pub win_ratio: WinRatio,
    /// x
    pub total_amount: f64,
    /// y = x * ratio
    pub awarded_amount: f64,
    /// z = x - y
    pub counterparty_benefit: f64,
    /// Input fee (fee-driven) or capped payable fee (total-driven).
    pub fee: f64,
    /// z / x * 100
    pub benefit_ratio: f64,
    pub threshold_met: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fee_cap: Option<FeeCapOutcome>,
}

impl CalculationResult {
    pub fn fee_capped(&self) -> bool {
        self.fee_cap.is_some_and(|c| c.capped)
    }

    /// Uncapped theoretical fee, when the mode computes one.
    pub fn fee_raw(&self) -> Option<f64> {
        self.fee_cap.map(|c| c.fee_raw)
    }

    /// How much the cap removed (zero when not capped).
    pub fn cap_excess(&self) -> f64 {
        match self.fee_cap {
            Some(c) if c.capped => c.fee_raw - self.fee,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accessors() {
        let r = CalculationRequest::TotalDriven { total: MonetaryAmount::new(1_000_000_000), ratio: 20.0 };
        assert_eq!(r.mode(), Mode::TotalDriven);
        assert_eq!(r.amount().get(), 1_000_000_000);
        assert_eq!(r.ratio(), 20.0);
    }

    #[test]
    fn mode_ceilings() {
        assert_eq!(Mode::FeeDriven.major_max(), 5);
        assert_eq!(Mode::TotalDriven.major_max(), 999);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn request_json_is_tagged_by_mode() {
        let r: CalculationRequest =
            serde_json::from_str(r#"{"mode":"fee","fee":350000000,"ratio":50}"#).unwrap();
        assert_eq!(r, CalculationRequest::FeeDriven { fee: MonetaryAmount::new(350_000_000), ratio: 50.0 });

        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["mode"], "fee");
        assert_eq!(v["fee"], 350_000_000u64);
    }

    #[test]
    fn cap_excess_only_when_capped() {
        let mut res = CalculationResult {
            mode: Mode::TotalDriven,
            win_ratio: WinRatio::new(0.0).unwrap(),
            total_amount: 20_000_000_000.0,
            awarded_amount: 0.0,
            counterparty_benefit: 20_000_000_000.0,
            fee: 500_000_000.0,
            benefit_ratio: 100.0,
            threshold_met: true,
            fee_cap: Some(FeeCapOutcome { fee_raw: 600_000_000.0, capped: true }),
        };
        assert!(res.fee_capped());
        assert_eq!(res.cap_excess(), 100_000_000.0);

        res.fee_cap = Some(FeeCapOutcome { fee_raw: 24_000_000.0, capped: false });
        res.fee = 24_000_000.0;
        assert!(!res.fee_capped());
        assert_eq!(res.cap_excess(), 0.0);

        res.fee_cap = None;
        assert!(!res.fee_capped());
        assert_eq!(res.fee_raw(), None);
        assert_eq!(res.cap_excess(), 0.0);
    }
}
