//! `result.json`: one calculation with the inputs that produced it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use sc_core::{CalculationRequest, CalculationResult};

use crate::canonical_json::write_canonical_file;
#[cfg(feature = "hash")]
use crate::hasher::sha256_canonical;
use crate::IoResult;

pub const RESULT_FILE_NAME: &str = "result.json";

/// Engine identifiers, baked at compile time by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub engine: EngineMeta,
    pub request: CalculationRequest,
    /// SHA-256 of the canonical request JSON; absent without the `hash` feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_sha256: Option<String>,
    pub result: CalculationResult,
}

impl ResultRecord {
    pub fn new(engine: EngineMeta, request: CalculationRequest, result: CalculationResult) -> IoResult<Self> {
        #[cfg(feature = "hash")]
        let request_sha256 = Some(sha256_canonical(&request)?);
        #[cfg(not(feature = "hash"))]
        let request_sha256 = None;
        Ok(Self { engine, request, request_sha256, result })
    }
}

/// Write `result.json` into `out_dir` (created if missing). Returns the file path.
pub fn write_result(out_dir: &Path, record: &ResultRecord) -> IoResult<PathBuf> {
    let path = out_dir.join(RESULT_FILE_NAME);
    write_canonical_file(record, &path)?;
    info!(
        path = %path.display(),
        request_sha256 = record.request_sha256.as_deref().unwrap_or("-"),
        "result written"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_include;
    use sc_core::{FeeCapOutcome, MonetaryAmount, Mode, WinRatio};
    use serde_json::json;

    fn sample() -> (CalculationRequest, CalculationResult) {
        let req = CalculationRequest::TotalDriven { total: MonetaryAmount::new(1_000_000_000), ratio: 20.0 };
        let res = CalculationResult {
            mode: Mode::TotalDriven,
            win_ratio: WinRatio::new(20.0).unwrap(),
            total_amount: 1_000_000_000.0,
            awarded_amount: 200_000_000.0,
            counterparty_benefit: 800_000_000.0,
            fee: 24_000_000.0,
            benefit_ratio: 80.0,
            threshold_met: true,
            fee_cap: Some(FeeCapOutcome { fee_raw: 24_000_000.0, capped: false }),
        };
        (req, res)
    }

    fn meta() -> EngineMeta {
        EngineMeta { name: "scalc".into(), version: "0.1.0".into() }
    }

    #[cfg(feature = "hash")]
    #[test]
    fn digest_covers_the_canonical_request() {
        let (req, res) = sample();
        let rec = ResultRecord::new(meta(), req, res).unwrap();
        let bytes = crate::canonical_json::to_canonical_bytes(&req).unwrap();
        assert_eq!(rec.request_sha256.as_deref(), Some(crate::hasher::sha256_hex(&bytes).as_str()));

        let other = CalculationRequest::TotalDriven { total: MonetaryAmount::new(2_000_000_000), ratio: 20.0 };
        let rec2 = ResultRecord::new(meta(), other, res).unwrap();
        assert_ne!(rec.request_sha256, rec2.request_sha256);
    }

    #[test]
    fn written_record_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let (req, res) = sample();
        let rec = ResultRecord::new(meta(), req, res).unwrap();
        let path = write_result(dir.path(), &rec).unwrap();
        assert_eq!(path.file_name().unwrap(), RESULT_FILE_NAME);

        let text = std::fs::read_to_string(&path).unwrap();
        let back: ResultRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, rec);

        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_json_include!(
            actual: v,
            expected: json!({
                "request": {"mode": "total", "total": 1_000_000_000u64, "ratio": 20.0},
                "result": {
                    "mode": "total",
                    "fee": 24_000_000.0,
                    "threshold_met": true,
                    "fee_cap": {"capped": false}
                }
            })
        );
    }
}
