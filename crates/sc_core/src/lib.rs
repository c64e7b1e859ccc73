//! sc_core — Core value types, fixed constants and the input adapter.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! engine (`sc_algo`, `sc_io`, `sc_report`, `sc_cli`).
//!
//! - Fixed system constants (fee rate, fee cap, qualifying threshold, unit scales)
//! - `MonetaryAmount` (integer, smallest currency unit) and the 억/천만 input adapter
//! - `WinRatio` (percentage in `[0, 100)`)
//! - `CalculationRequest` / `CalculationResult` value records
//! - A single `ValidationError` taxonomy
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod constants;
pub mod amount;
pub mod ratio;
pub mod request;

pub mod errors {
    //! Validation failures. Every rejection happens before computation starts.

    use thiserror::Error;

    /// Which precondition a request (or one of its form fields) failed.
    #[derive(Clone, Copy, Debug, PartialEq, Error)]
    pub enum ValidationError {
        #[error("fee must be greater than zero")]
        FeeNotPositive,
        #[error("fee {fee} exceeds the cap")]
        FeeExceedsCap { fee: u64 },
        #[error("win ratio {ratio} out of range [0, 100)")]
        RatioOutOfRange { ratio: f64 },
        #[error("total amount must be greater than zero")]
        TotalNotPositive,
        #[error("major units {major} above field ceiling {max}")]
        MajorUnitsOutOfRange { major: u32, max: u32 },
        #[error("sub units {sub} out of range [0, 9]")]
        SubUnitsOutOfRange { sub: u32 },
    }

    pub type ValidationResult<T> = Result<T, ValidationError>;
}

pub use amount::{compose, compose_for, MonetaryAmount};
pub use errors::{ValidationError, ValidationResult};
pub use ratio::WinRatio;
pub use request::{CalculationRequest, CalculationResult, FeeCapOutcome, Mode};
