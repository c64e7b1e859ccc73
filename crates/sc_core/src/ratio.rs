//! Win ratio: percentage of the total amount awarded to the plaintiff.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::RATIO_MAX_EXCLUSIVE;
use crate::errors::{ValidationError, ValidationResult};

/// Percentage in `[0, 100)`. `100` would divide by zero in fee-driven mode.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WinRatio(f64);

impl WinRatio {
    pub fn new(percent: f64) -> ValidationResult<Self> {
        if percent.is_finite() && (0.0..RATIO_MAX_EXCLUSIVE).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(ValidationError::RatioOutOfRange { ratio: percent })
        }
    }

    /// Percent value as entered, e.g. `20.0`.
    #[inline]
    pub fn percent(self) -> f64 { self.0 }

    /// `percent / 100`.
    #[inline]
    pub fn fraction(self) -> f64 { self.0 / 100.0 }
}

impl fmt::Display for WinRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for WinRatio {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::de::{Error as DeError, Unexpected};
        let v = f64::deserialize(d)?;
        WinRatio::new(v).map_err(|_| D::Error::invalid_value(Unexpected::Float(v), &"ratio in [0, 100)"))
    }
}
