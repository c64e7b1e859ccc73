//! Integer money and the input adapter for 억 + 천만 field pairs.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{MAJOR_UNIT_SCALE, SUB_UNIT_MAX, SUB_UNIT_SCALE};
use crate::errors::{ValidationError, ValidationResult};
use crate::request::Mode;

/// Non-negative amount in the smallest currency unit.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MonetaryAmount(u64);

impl MonetaryAmount {
    pub const ZERO: MonetaryAmount = MonetaryAmount(0);

    #[inline]
    pub const fn new(units: u64) -> Self { Self(units) }

    #[inline]
    pub const fn get(self) -> u64 { self.0 }

    #[inline]
    pub const fn is_zero(self) -> bool { self.0 == 0 }

    /// Lossless for every amount the adapter can produce (< 2^53).
    #[inline]
    pub fn as_f64(self) -> f64 { self.0 as f64 }

    /// Inverse of [`compose`]: `(major, sub, remainder)` where `remainder < SUB_UNIT_SCALE`.
    pub fn split(self) -> (u64, u64, u64) {
        let major = self.0 / MAJOR_UNIT_SCALE;
        let rest = self.0 % MAJOR_UNIT_SCALE;
        (major, rest / SUB_UNIT_SCALE, rest % SUB_UNIT_SCALE)
    }
}

impl From<u64> for MonetaryAmount {
    fn from(v: u64) -> Self { Self(v) }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compose a `(major, sub)` field pair into one exact integer amount.
///
/// Only the sub-unit digit is bounded here; field ceilings on `major` are
/// per mode, see [`compose_for`].
pub fn compose(major: u32, sub: u32) -> ValidationResult<MonetaryAmount> {
    if sub > SUB_UNIT_MAX {
        return Err(ValidationError::SubUnitsOutOfRange { sub });
    }
    Ok(MonetaryAmount(major as u64 * MAJOR_UNIT_SCALE + sub as u64 * SUB_UNIT_SCALE))
}

/// Compose the amount field of `mode`, enforcing that field's entry ceiling
/// (5 for the fee field, 999 for the total field).
pub fn compose_for(mode: Mode, major: u32, sub: u32) -> ValidationResult<MonetaryAmount> {
    let max = mode.major_max();
    if major > max {
        return Err(ValidationError::MajorUnitsOutOfRange { major, max });
    }
    compose(major, sub)
}
