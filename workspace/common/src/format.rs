//! Display helpers shared by the API and the CLI.

/// Month labels used on the performance chart's x axis.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Slice colours of the segment and category pie charts.
pub const PIE_COLORS: [&str; 3] = ["#645565", "#ceb4b7", "#e2e0eb"];

/// Label of a calendar month (1-12), `None` outside that range.
pub fn month_label(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_LABELS[month as usize - 1]),
        _ => None,
    }
}

/// Formats an integer with comma thousands separators, e.g. `-1,234,567`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an integer amount as dollars, e.g. `$12,642,905`.
///
/// The sign follows the dollar sign (`$-1,234`), as on the KPI panel.
pub fn format_currency(value: i64) -> String {
    format!("${}", format_thousands(value))
}
