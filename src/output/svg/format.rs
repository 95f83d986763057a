//! Text formatting helpers shared by SVG and HTML rendering.

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Abbreviate large counts for labels: 10000 → "10.0K", 2500000 → "2.5M".
/// Values below 10K are left untouched.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(value: i64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 10_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
