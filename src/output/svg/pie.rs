//! Proportion chart rendering: engine slices drawn as circular sectors.

use std::fmt::Write;

use crate::chart::{self, CENTER, ChartOutcome, Entry, LegendRow, RADIUS, VIEWBOX_SIZE};
use crate::error::Result;

use super::SvgElement;
use super::format::{format_number, html_escape};
use super::style::{TextAnchor, ThemeColor};

/// Radius of the donut hole carrying the center total.
const HOLE_RADIUS: f64 = 20.0;

/// Circular proportion chart with a donut-hole total.
///
/// Wraps the chart engine output for one panel: sectors become `<path>`
/// elements with hover tooltips, the aggregate total sits in the center, and
/// a zero total renders as a muted placeholder circle.
#[derive(Debug)]
pub struct ProportionChart {
    title: String,
    outcome: ChartOutcome,
    legend: Vec<LegendRow>,
    total: f64,
}

impl ProportionChart {
    /// Compute the chart for `entries`.
    ///
    /// # Errors
    /// Propagates the engine's input validation (empty sequence, negative
    /// values). A zero total is not an error and renders as the placeholder.
    pub fn new(title: impl Into<String>, entries: &[Entry]) -> Result<Self> {
        let outcome = chart::compute_slices(entries)?;
        let legend = chart::compute_legend(entries)?;
        let total = chart::compute_total(entries);

        Ok(Self {
            title: title.into(),
            outcome,
            legend,
            total,
        })
    }

    /// Legend rows matching the drawn sectors, in input order.
    #[must_use]
    pub fn legend(&self) -> &[LegendRow] {
        &self.legend
    }

    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        self.outcome.is_no_data()
    }

    fn write_placeholder(output: &mut String) {
        let _ = writeln!(
            output,
            r#"    <circle cx="{CENTER}" cy="{CENTER}" r="{RADIUS}" fill="{}"/>"#,
            ThemeColor::Border
        );
        let _ = writeln!(
            output,
            r#"    <text x="{CENTER}" y="{CENTER}" text-anchor="{}" dominant-baseline="middle" fill="{}" font-size="8">No data</text>"#,
            TextAnchor::Middle,
            ThemeColor::TextMuted
        );
    }

    fn write_sectors(&self, output: &mut String) {
        for (slice, row) in self.outcome.slices().iter().zip(&self.legend) {
            let _ = writeln!(
                output,
                r#"    <path d="{}" fill="{}">"#,
                slice.path, slice.color
            );
            // Accessibility: title element for screen readers and hover tooltip
            let _ = writeln!(
                output,
                "        <title>{}: {} ({}%)</title>",
                html_escape(&slice.label),
                row.value,
                row.percentage
            );
            output.push_str("    </path>\n");
        }

        self.write_center_total(output);
    }

    fn write_center_total(&self, output: &mut String) {
        #[allow(clippy::cast_possible_truncation)]
        let total_display = format_number(self.total as i64);

        let _ = writeln!(
            output,
            r#"    <circle cx="{CENTER}" cy="{CENTER}" r="{HOLE_RADIUS}" fill="{}"/>"#,
            ThemeColor::Card
        );
        let _ = writeln!(
            output,
            r#"    <text x="{CENTER}" y="{CENTER}" text-anchor="{}" dominant-baseline="middle" fill="{}" font-size="10" font-weight="bold">{total_display}</text>"#,
            TextAnchor::Middle,
            ThemeColor::Text
        );
        let _ = writeln!(
            output,
            r#"    <text x="{CENTER}" y="{}" text-anchor="{}" fill="{}" font-size="4">Total</text>"#,
            CENTER + 9.0,
            TextAnchor::Middle,
            ThemeColor::TextMuted
        );
    }
}

impl SvgElement for ProportionChart {
    fn render(&self) -> String {
        let mut output = String::new();

        // viewBox-only sizing keeps the document responsive; <title> as first
        // child provides the accessible name.
        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {VIEWBOX_SIZE} {VIEWBOX_SIZE}" xmlns="http://www.w3.org/2000/svg" role="img">"#
        );
        let _ = writeln!(output, "    <title>{}</title>", html_escape(&self.title));

        if self.outcome.is_no_data() {
            Self::write_placeholder(&mut output);
        } else {
            self.write_sectors(&mut output);
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
