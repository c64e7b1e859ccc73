//! render_json.rs
//! Report JSON renderer (title → mode → inputs → figures → threshold → cap_notice → caption).
//!
//! Built with `serde_json`'s `preserve_order` feature: the renderer relies on
//! insertion order of `serde_json::Map<String, Value>`.

use serde_json::{Map as JsonMap, Value};

use crate::{CapNotice, FigureRow, InputsBlock, ReportModel, ThresholdBlock};

/// Build the top-level report object in fixed section order.
pub fn render_report_json(m: &ReportModel) -> Value {
    let mut root = obj();
    root.insert("title".into(), Value::String(m.title.to_string()));
    root.insert("mode".into(), Value::String(m.mode.as_str().to_string()));
    root.insert("inputs".into(), inputs_json(&m.inputs));
    root.insert("figures".into(), Value::Array(m.figures.iter().map(figure_json).collect()));
    root.insert("threshold".into(), threshold_json(&m.threshold));
    // Omitted when the cap did not bind.
    if let Some(c) = &m.cap_notice {
        root.insert("cap_notice".into(), cap_notice_json(c));
    }
    root.insert("caption".into(), Value::String(m.caption.clone()));
    Value::Object(root)
}

/// Pretty string form, newline-terminated.
pub fn render_report_json_string(m: &ReportModel) -> String {
    let mut s = serde_json::to_string_pretty(&render_report_json(m)).unwrap_or_default();
    s.push('\n');
    s
}

/* ----------------------- sections ----------------------- */

fn inputs_json(i: &InputsBlock) -> Value {
    let mut o = obj();
    o.insert("field".into(), i.field.into());
    o.insert("amount_label".into(), Value::String(i.amount_label.clone()));
    o.insert("amount_eok".into(), Value::String(i.amount_eok.clone()));
    o.insert("win_ratio".into(), Value::String(i.win_ratio.clone()));
    if let Some(cap) = &i.fee_cap_eok {
        o.insert("fee_cap_eok".into(), Value::String(cap.clone()));
    }
    Value::Object(o)
}

fn figure_json(f: &FigureRow) -> Value {
    let mut o = obj();
    o.insert("key".into(), f.key.into());
    o.insert("label".into(), f.label.into());
    o.insert("value".into(), Value::String(f.value.clone()));
    Value::Object(o)
}

fn threshold_json(t: &ThresholdBlock) -> Value {
    let mut o = obj();
    o.insert("met".into(), Value::Bool(t.met));
    o.insert("benefit_ratio".into(), Value::String(t.benefit_ratio.clone()));
    o.insert("message".into(), Value::String(t.message.clone()));
    Value::Object(o)
}

fn cap_notice_json(c: &CapNotice) -> Value {
    let mut o = obj();
    o.insert("fee_raw_eok".into(), Value::String(c.fee_raw_eok.clone()));
    o.insert("fee_cap_eok".into(), Value::String(c.fee_cap_eok.clone()));
    o.insert("excess_eok".into(), Value::String(c.excess_eok.clone()));
    o.insert("message".into(), Value::String(c.message.clone()));
    Value::Object(o)
}

/* ----------------------- helpers ----------------------- */

#[inline]
fn obj() -> JsonMap<String, Value> {
    JsonMap::new()
}
