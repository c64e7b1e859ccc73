// crates/sc_report/src/render_html.rs
//
// Deterministic, offline HTML renderer. One self-contained page, no external
// assets, every text field escaped. Section order: inputs → figures →
// threshold → cap notice.

use std::fmt::Write as _;

use crate::ReportModel;

/// Escape text for HTML (minimal, deterministic).
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto}\
table{border-collapse:collapse;width:100%}\
td,th{padding:.3rem .5rem;border-bottom:1px solid #ddd;text-align:left}\
td.num{text-align:right;font-variant-numeric:tabular-nums}\
.met{color:#1a7f37}.unmet{color:#b42318}.cap{background:#fff4e5;padding:.5rem}";

pub fn render_report_html(m: &ReportModel) -> String {
    let mut h = String::with_capacity(2048);

    // `write!` into a String cannot fail.
    let _ = writeln!(h, "<!DOCTYPE html>");
    let _ = writeln!(h, "<html lang=\"ko\">");
    let _ = writeln!(h, "<head><meta charset=\"utf-8\"><title>{}</title><style>{STYLE}</style></head>", esc(m.title));
    let _ = writeln!(h, "<body>");
    let _ = writeln!(h, "<h1>{}</h1>", esc(m.title));

    // Inputs
    let i = &m.inputs;
    let _ = writeln!(h, "<section id=\"inputs\"><h2>Inputs</h2><table>");
    let _ = writeln!(
        h,
        "<tr><th>{}</th><td class=\"num\">{} (= {}억 원)</td></tr>",
        esc(i.field),
        esc(&i.amount_label),
        esc(&i.amount_eok)
    );
    let _ = writeln!(h, "<tr><th>win ratio</th><td class=\"num\">{}</td></tr>", esc(&i.win_ratio));
    if let Some(cap) = &i.fee_cap_eok {
        let _ = writeln!(h, "<tr><th>fee cap</th><td class=\"num\">{}억</td></tr>", esc(cap));
    }
    let _ = writeln!(h, "</table></section>");

    // Figures
    let _ = writeln!(h, "<section id=\"figures\"><h2>Result</h2><table>");
    for f in &m.figures {
        let _ = writeln!(
            h,
            "<tr data-key=\"{}\"><th>{}</th><td class=\"num\">{}</td></tr>",
            esc(f.key),
            esc(f.label),
            esc(&f.value)
        );
    }
    let _ = writeln!(h, "</table></section>");

    // Threshold
    let class = if m.threshold.met { "met" } else { "unmet" };
    let _ = writeln!(
        h,
        "<section id=\"threshold\"><p class=\"{class}\">{}</p></section>",
        esc(&m.threshold.message)
    );

    if let Some(c) = &m.cap_notice {
        let _ = writeln!(h, "<section id=\"cap-notice\"><p class=\"cap\">{}</p></section>", esc(&c.message));
    }

    let _ = writeln!(h, "<footer><small>{}</small></footer>", esc(&m.caption));
    let _ = writeln!(h, "</body>\n</html>");
    h
}
