//! Plain-text renderer for terminals.
//!
//! Layout: title, input echo, figures, verdict. A cap notice sits directly
//! above the benefit-ratio row.

use std::fmt::Write as _;

use crate::{InputsBlock, ReportModel};

pub fn render_report_text(m: &ReportModel) -> String {
    let mut out = String::with_capacity(512);
    let width = m.figures.iter().map(|f| f.label.chars().count()).max().unwrap_or(0);

    let _ = writeln!(out, "{}", m.title);
    write_inputs(&mut out, &m.inputs);
    let _ = writeln!(out);
    for f in &m.figures {
        if f.key == "benefit_ratio" {
            if let Some(c) = &m.cap_notice {
                let _ = writeln!(out, "  {}", c.message);
            }
        }
        let _ = writeln!(out, "  {:<width$}  {:>14}", f.label, f.value);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", m.threshold.message);
    out
}

fn write_inputs(out: &mut String, i: &InputsBlock) {
    let field = match i.field {
        "fee" => "Fee",
        _ => "Total amount",
    };
    let _ = writeln!(out, "  {field}: {} (= {}억 원)", i.amount_label, i.amount_eok);
    let _ = writeln!(out, "  Win ratio: {}", i.win_ratio);
    if let Some(cap) = &i.fee_cap_eok {
        let _ = writeln!(out, "  Fee cap: {cap}억 원");
    }
}
