//! sc_report/src/lib.rs — Result presenter: display model + renderers (text/JSON/HTML).
//!
//! Rules:
//! - No I/O here. Callers supply the request and the engine result in memory.
//! - No recomputation: every figure is the engine's value, only rounded.
//! - Amounts in 억 (1 decimal; the fee 2 decimals), ratios with 1 decimal.
//! - Stable section order and field names.

#![forbid(unsafe_code)]

use serde::Serialize;
use thiserror::Error;

use sc_core::constants::{FEE_CAP, THRESHOLD_RATIO};
use sc_core::{CalculationRequest, CalculationResult, Mode};

pub mod format;
pub mod messages;
pub mod render_text;
#[cfg(feature = "render_json")]
pub mod render_json;
#[cfg(feature = "render_html")]
pub mod render_html;

pub use format::{amount_label, format_eok, format_eok_won, format_percent_1dp};
pub use messages::{describe_validation_error, fee_input_warning};

// ===== Errors =====

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("inconsistent: {0}")]
    Inconsistent(&'static str),
}

// ===== Model =====

/// Echo of the form inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputsBlock {
    /// Which field was entered: "fee" or "total".
    pub field: &'static str,
    /// `"3억 5천만 원"`
    pub amount_label: String,
    /// `"3.5"`
    pub amount_eok: String,
    /// `"50.0%"`
    pub win_ratio: String,
    /// Total-driven mode echoes the cap, `"5.0"`.
    pub fee_cap_eok: Option<String>,
}

/// One figure line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdBlock {
    pub met: bool,
    pub benefit_ratio: String,
    pub message: String,
}

/// Present only when the cap clipped the theoretical fee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapNotice {
    pub fee_raw_eok: String,
    pub fee_cap_eok: String,
    /// Amount the cap removed.
    pub excess_eok: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportModel {
    pub title: &'static str,
    pub mode: Mode,
    pub inputs: InputsBlock,
    pub figures: Vec<FigureRow>,
    pub threshold: ThresholdBlock,
    pub cap_notice: Option<CapNotice>,
    /// One-line recap of the inputs.
    pub caption: String,
}

// ===== Assembly =====

pub fn title_for(mode: Mode) -> &'static str {
    match mode {
        Mode::FeeDriven => "Reverse calculation from fee",
        Mode::TotalDriven => "Calculation from total amount",
    }
}

/// Build the display model for one calculation.
pub fn build_report(req: &CalculationRequest, res: &CalculationResult) -> Result<ReportModel, ReportError> {
    if req.mode() != res.mode {
        return Err(ReportError::Inconsistent("request and result modes differ"));
    }
    if res.mode == Mode::TotalDriven && res.fee_cap.is_none() {
        return Err(ReportError::Inconsistent("total-driven result without fee cap outcome"));
    }

    let amount = req.amount();
    let win_ratio = format_percent_1dp(res.win_ratio.percent());
    let cap_eok_1dp = format_eok(FEE_CAP as f64, 1);

    let inputs = InputsBlock {
        field: res.mode.as_str(),
        amount_label: amount_label(amount),
        amount_eok: format_eok(amount.as_f64(), 1),
        win_ratio: win_ratio.clone(),
        fee_cap_eok: (res.mode == Mode::TotalDriven).then(|| cap_eok_1dp.clone()),
    };

    let mut figures = vec![
        FigureRow { key: "total_amount", label: "Total amount (x)", value: format_eok_won(res.total_amount, 1) },
        FigureRow { key: "awarded_amount", label: "Awarded amount (y)", value: format_eok_won(res.awarded_amount, 1) },
        FigureRow {
            key: "counterparty_benefit",
            label: "Counterparty benefit (z)",
            value: format_eok_won(res.counterparty_benefit, 1),
        },
    ];
    if res.mode == Mode::TotalDriven {
        figures.push(FigureRow { key: "fee", label: "Fee (3%)", value: format_eok_won(res.fee, 2) });
    }
    let benefit_ratio = format_percent_1dp(res.benefit_ratio);
    figures.push(FigureRow { key: "benefit_ratio", label: "Benefit ratio (z/x)", value: benefit_ratio.clone() });

    let threshold = ThresholdBlock {
        met: res.threshold_met,
        benefit_ratio,
        message: threshold_message(res.threshold_met),
    };

    let cap_notice = match res.fee_cap {
        Some(c) if c.capped => {
            let fee_raw_eok = format_eok(c.fee_raw, 2);
            let fee_cap_eok = format_eok(FEE_CAP as f64, 2);
            let excess_eok = format_eok(res.cap_excess(), 2);
            let message = format!(
                "Fee cap applied: theoretical {fee_raw_eok}억 → payable maximum {fee_cap_eok}억 ({excess_eok}억 over the cap)"
            );
            Some(CapNotice { fee_raw_eok, fee_cap_eok, excess_eok, message })
        }
        _ => None,
    };

    let caption = match res.mode {
        Mode::FeeDriven => format!(
            "Inputs · fee: {}억 원 · win ratio: {win_ratio}",
            format_eok(res.fee, 1)
        ),
        Mode::TotalDriven => format!(
            "Inputs · total: {}억 · win ratio: {win_ratio} · fee cap: {cap_eok_1dp}억",
            format_eok(res.total_amount, 1)
        ),
    };

    Ok(ReportModel {
        title: title_for(res.mode),
        mode: res.mode,
        inputs,
        figures,
        threshold,
        cap_notice,
        caption,
    })
}

fn threshold_message(met: bool) -> String {
    let t = THRESHOLD_RATIO;
    if met {
        format!("Fee criterion met: z/x ≥ {t}%")
    } else {
        format!("Fee criterion not met: z/x < {t}%")
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use sc_algo::{compute_from_fee, compute_from_total};
    use sc_core::MonetaryAmount;

    fn fee_case() -> (CalculationRequest, CalculationResult) {
        let req = CalculationRequest::FeeDriven { fee: MonetaryAmount::new(350_000_000), ratio: 50.0 };
        let res = compute_from_fee(MonetaryAmount::new(350_000_000), 50.0).unwrap();
        (req, res)
    }

    #[test]
    fn fee_mode_report() {
        let (req, res) = fee_case();
        let m = build_report(&req, &res).unwrap();
        assert_eq!(m.title, "Reverse calculation from fee");
        assert_eq!(m.inputs.amount_label, "3억 5천만 원");
        assert_eq!(m.inputs.fee_cap_eok, None);
        let values: Vec<&str> = m.figures.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["233.3 억 원", "116.7 억 원", "116.7 억 원", "50.0%"]);
        assert!(!m.threshold.met);
        assert_eq!(m.threshold.message, "Fee criterion not met: z/x < 60%");
        assert!(m.cap_notice.is_none());
        assert_eq!(m.caption, "Inputs · fee: 3.5억 원 · win ratio: 50.0%");
    }

    #[test]
    fn total_mode_report_includes_fee_row() {
        let total = MonetaryAmount::new(1_000_000_000);
        let req = CalculationRequest::TotalDriven { total, ratio: 20.0 };
        let res = compute_from_total(total, 20.0).unwrap();
        let m = build_report(&req, &res).unwrap();
        let keys: Vec<&str> = m.figures.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["total_amount", "awarded_amount", "counterparty_benefit", "fee", "benefit_ratio"]);
        assert_eq!(m.figures[3].value, "0.24 억 원");
        assert!(m.threshold.met);
        assert_eq!(m.inputs.fee_cap_eok.as_deref(), Some("5.0"));
        assert_eq!(m.caption, "Inputs · total: 10.0억 · win ratio: 20.0% · fee cap: 5.0억");
    }

    #[test]
    fn capped_total_gets_notice() {
        let total = MonetaryAmount::new(99_990_000_000);
        let req = CalculationRequest::TotalDriven { total, ratio: 0.0 };
        let res = compute_from_total(total, 0.0).unwrap();
        let m = build_report(&req, &res).unwrap();
        let notice = m.cap_notice.expect("capped");
        assert_eq!(notice.fee_raw_eok, "30.00");
        assert_eq!(notice.fee_cap_eok, "5.00");
        assert_eq!(notice.excess_eok, "25.00");
        assert_eq!(
            notice.message,
            "Fee cap applied: theoretical 30.00억 → payable maximum 5.00억 (25.00억 over the cap)"
        );
    }

    #[test]
    fn mismatched_modes_are_rejected() {
        let (_, res) = fee_case();
        let req = CalculationRequest::TotalDriven { total: MonetaryAmount::new(1), ratio: 0.0 };
        assert_eq!(
            build_report(&req, &res),
            Err(ReportError::Inconsistent("request and result modes differ"))
        );
    }
}
