//! User-facing sentences for rejected input. The engine only classifies.

use sc_core::constants::{FEE_CAP, MAJOR_UNIT_LABEL, SUB_UNIT_LABEL, SUB_UNIT_MAX};
use sc_core::{MonetaryAmount, ValidationError};

use crate::format::format_eok;

pub fn describe_validation_error(e: &ValidationError) -> String {
    match e {
        ValidationError::FeeNotPositive => "Input error: the fee must be greater than 0.".to_string(),
        ValidationError::FeeExceedsCap { .. } => format!(
            "Input error: the fee must be {}{MAJOR_UNIT_LABEL} or less.",
            format_eok(FEE_CAP as f64, 0)
        ),
        ValidationError::RatioOutOfRange { .. } => {
            "Input error: the win ratio must be at least 0% and below 100%.".to_string()
        }
        ValidationError::TotalNotPositive => "Input error: the total amount must be greater than 0.".to_string(),
        ValidationError::MajorUnitsOutOfRange { max, .. } => {
            format!("Input error: this field accepts at most {max}{MAJOR_UNIT_LABEL}.")
        }
        ValidationError::SubUnitsOutOfRange { .. } => {
            format!("Input error: the {SUB_UNIT_LABEL} field takes a single digit (0-{SUB_UNIT_MAX}).")
        }
    }
}

/// Warning shown as soon as a fee above the cap is entered, before any
/// calculation is requested.
pub fn fee_input_warning(fee: MonetaryAmount) -> Option<String> {
    (fee.get() > FEE_CAP).then(|| {
        format!("The fee must be {}{MAJOR_UNIT_LABEL} or less.", format_eok(FEE_CAP as f64, 0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_message_names_five_eok() {
        let m = describe_validation_error(&ValidationError::FeeExceedsCap { fee: 500_000_001 });
        assert!(m.contains("5억"), "{m}");
    }

    #[test]
    fn every_variant_has_a_sentence() {
        let all = [
            ValidationError::FeeNotPositive,
            ValidationError::FeeExceedsCap { fee: 1 },
            ValidationError::RatioOutOfRange { ratio: 100.0 },
            ValidationError::TotalNotPositive,
            ValidationError::MajorUnitsOutOfRange { major: 6, max: 5 },
            ValidationError::SubUnitsOutOfRange { sub: 10 },
        ];
        for e in &all {
            assert!(describe_validation_error(e).starts_with("Input error:"));
        }
    }

    #[test]
    fn warning_only_above_cap() {
        assert!(fee_input_warning(MonetaryAmount::new(FEE_CAP)).is_none());
        assert!(fee_input_warning(MonetaryAmount::new(590_000_000)).is_some());
    }
}
