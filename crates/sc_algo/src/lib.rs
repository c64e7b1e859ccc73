// crates/sc_algo/src/lib.rs
#![forbid(unsafe_code)]

//! Formula engine. Pure, synchronous, no shared state: every entry point is a
//! plain function of its arguments and is safe to call from any thread.

pub use sc_core::{
    CalculationRequest, CalculationResult, FeeCapOutcome, MonetaryAmount, Mode, ValidationError,
    ValidationResult, WinRatio,
};

// ----------------------------- Shared rules ------------------------------------------

pub mod rules;

pub use rules::{apply_fee_cap, benefit_ratio, meets_threshold};

// ----------------------------- Modes (public surface) --------------------------------

pub mod modes {
    pub mod fee_driven;
    pub mod total_driven;

    pub use fee_driven::compute_from_fee;
    pub use total_driven::compute_from_total;
}

pub use modes::{compute_from_fee, compute_from_total};

/// Dispatch a request to the mode it names.
pub fn compute(req: &CalculationRequest) -> ValidationResult<CalculationResult> {
    match *req {
        CalculationRequest::FeeDriven { fee, ratio } => compute_from_fee(fee, ratio),
        CalculationRequest::TotalDriven { total, ratio } => compute_from_total(total, ratio),
    }
}
