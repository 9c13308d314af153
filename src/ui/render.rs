use std::fmt::Write;

use crate::domain::order::OrderSummary;

pub const NEXT_STEP_NOTE: &str = "(Next step: send to server &amp; save)";

/// `$` followed by the amount fixed to two decimal places.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Markup for the summary region. Deterministic for a given summary.
pub fn render_summary(summary: &OrderSummary) -> String {
    let mut items = String::new();
    for line in &summary.lines {
        // Writing into a String cannot fail
        let _ = write!(
            items,
            "<li>{} × {} — {}</li>",
            line.quantity,
            escape_html(&line.name),
            format_money(line.line_total)
        );
    }

    format!(
        "<h3>Order Summary (Table {table})</h3>\n\
         <ul>\n{items}\n</ul>\n\
         <p><strong>Subtotal:</strong> {subtotal}</p>\n\
         <p style=\"color:#6b7280;margin-top:6px;\">{note}</p>\n",
        table = escape_html(summary.table.as_str()),
        items = items,
        subtotal = format_money(summary.subtotal),
        note = NEXT_STEP_NOTE,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
