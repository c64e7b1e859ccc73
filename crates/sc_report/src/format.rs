//! Display formatting. Amounts are shown in 억 with a fixed number of
//! decimals; ratios as percents with one decimal.

use sc_core::constants::{CURRENCY_LABEL, MAJOR_UNIT_LABEL, MAJOR_UNIT_SCALE, SUB_UNIT_LABEL};
use sc_core::MonetaryAmount;

/// `amount / 10^8` with `decimals` places, e.g. `format_eok(350_000_000.0, 1) == "3.5"`.
/// Non-finite values render as `"—"`.
pub fn format_eok(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    format!("{:.*}", decimals, amount / MAJOR_UNIT_SCALE as f64)
}

/// `"233.3 억 원"`.
pub fn format_eok_won(amount: f64, decimals: usize) -> String {
    format!("{} {MAJOR_UNIT_LABEL} {CURRENCY_LABEL}", format_eok(amount, decimals))
}

/// Percent value (already ×100) with one decimal: `"50.0%"`.
pub fn format_percent_1dp(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.1}%")
}

/// Form-field echo of an integer amount: `"3억 5천만 원"`.
pub fn amount_label(amount: MonetaryAmount) -> String {
    let (major, sub, _) = amount.split();
    format!("{major}{MAJOR_UNIT_LABEL} {sub}{SUB_UNIT_LABEL} {CURRENCY_LABEL}")
}
