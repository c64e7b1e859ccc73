//! Loader: read a local JSON request file and normalize it into a
//! `CalculationRequest`. No network I/O.
//!
//! Accepted shapes (amount as smallest units, or as 억/천만 form fields). Both
//! go through the input adapter, so a unit amount must be a whole number of
//! 천만 and respects the field ceiling of its mode:
//!
//! ```json
//! {"mode": "fee",   "fee":   {"major": 3, "sub": 5}, "ratio": 50}
//! {"mode": "total", "total": 1230000000,             "ratio": 20.5}
//! ```
//!
//! A missing `ratio` defaults to `0.0`, as on a fresh form.

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use sc_core::constants::SUB_UNIT_SCALE;
use sc_core::{compose_for, CalculationRequest, MonetaryAmount, Mode};

use crate::{looks_like_url_strict, IoError, IoResult};

/// Requests are a handful of fields; anything larger is not a request.
pub const MAX_REQUEST_BYTES: u64 = 64 * 1024;

/// Amount as written in a request file.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// Smallest-unit integer; must split exactly into 억 + 천만.
    Units(u64),
    /// 억 + 천만 form fields; the field ceiling of the mode applies.
    Fields {
        major: u32,
        #[serde(default)]
        sub: u32,
    },
}

impl AmountInput {
    pub fn resolve(self, mode: Mode) -> IoResult<MonetaryAmount> {
        match self {
            AmountInput::Units(u) => {
                let (major, sub, rem) = MonetaryAmount::new(u).split();
                if rem != 0 {
                    return Err(IoError::Json(format!(
                        "amount {u} is not a whole number of {SUB_UNIT_SCALE}-unit steps"
                    )));
                }
                let major = u32::try_from(major).unwrap_or(u32::MAX);
                // sub < 10 by construction of split()
                Ok(compose_for(mode, major, sub as u32)?)
            }
            AmountInput::Fields { major, sub } => Ok(compose_for(mode, major, sub)?),
        }
    }
}

/// Raw request file (before the input adapter runs).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "mode")]
pub enum RequestFile {
    #[serde(rename = "fee")]
    Fee {
        fee: AmountInput,
        #[serde(default)]
        ratio: f64,
    },
    #[serde(rename = "total")]
    Total {
        total: AmountInput,
        #[serde(default)]
        ratio: f64,
    },
}

impl RequestFile {
    pub fn into_request(self) -> IoResult<CalculationRequest> {
        Ok(match self {
            RequestFile::Fee { fee, ratio } => CalculationRequest::FeeDriven {
                fee: fee.resolve(Mode::FeeDriven)?,
                ratio,
            },
            RequestFile::Total { total, ratio } => CalculationRequest::TotalDriven {
                total: total.resolve(Mode::TotalDriven)?,
                ratio,
            },
        })
    }
}

/// Parse request JSON text.
pub fn parse_request(text: &str) -> IoResult<CalculationRequest> {
    let raw: RequestFile = serde_json::from_str(text)?;
    raw.into_request()
}

/// Read, bound and parse a local request file.
pub fn load_request(path: &Path) -> IoResult<CalculationRequest> {
    if let Some(s) = path.to_str() {
        if looks_like_url_strict(s) {
            return Err(IoError::Path(format!("not a local path: {s}")));
        }
    }

    let f = File::open(path).map_err(|e| IoError::Path(format!("open {}: {e}", path.display())))?;
    let mut buf = String::new();
    f.take(MAX_REQUEST_BYTES + 1).read_to_string(&mut buf)?;
    if buf.len() as u64 > MAX_REQUEST_BYTES {
        return Err(IoError::Limit(format!("{} exceeds {MAX_REQUEST_BYTES} bytes", path.display())));
    }

    let req = parse_request(&buf)?;
    info!(path = %path.display(), mode = req.mode().as_str(), "request loaded");
    Ok(req)
}
