use std::fmt::Write;

use crate::chart::{self, ChartOutcome};
use crate::error::Result;
use crate::model::{ChartPanel, Dashboard, Kpi, KpiStatus, Supplier};

use super::DashboardFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: KpiStatus) -> &'static str {
        match status {
            KpiStatus::Success => "✓",
            KpiStatus::Warning => "⚠",
            KpiStatus::Error => "✗",
        }
    }

    fn colorize(&self, text: &str, status: KpiStatus) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = match status {
            KpiStatus::Success => ansi::GREEN,
            KpiStatus::Warning => ansi::YELLOW,
            KpiStatus::Error => ansi::RED,
        };

        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_kpi(&self, output: &mut String, kpi: &Kpi) {
        let icon = self.colorize(Self::status_icon(kpi.status), kpi.status);
        let _ = write!(
            output,
            "  {icon} {}: {} {} (target {}",
            kpi.title, kpi.value, kpi.unit, kpi.target
        );
        if let Some(trend) = kpi.trend {
            let _ = write!(output, ", {trend:+}% w/w");
        }
        output.push_str(")\n");
    }

    fn write_chart(&self, output: &mut String, panel: &ChartPanel) -> Result<()> {
        let outcome = chart::compute_slices(&panel.entries)?;
        let legend = chart::compute_legend(&panel.entries)?;
        let total = chart::compute_total(&panel.entries);

        let _ = writeln!(output, "{} (total {total})", panel.title);

        if matches!(outcome, ChartOutcome::NoData) {
            output.push_str("  no data\n");
            return Ok(());
        }

        let label_width = legend
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        for (row, slice) in legend.iter().zip(outcome.slices()) {
            let _ = write!(
                output,
                "  {:<label_width$}  {:>6}  ({:>5}%)",
                row.label, row.value, row.percentage
            );
            if self.verbose > 0 {
                let span = slice.end_angle - slice.start_angle;
                let _ = write!(output, "  [{span:.1}°]");
            }
            output.push('\n');
        }

        Ok(())
    }

    fn write_supplier(&self, output: &mut String, rank: usize, supplier: &Supplier) {
        let rate = self.colorize(
            &format!("{:>4.1}%", supplier.error_rate),
            supplier.severity(),
        );
        let _ = writeln!(
            output,
            "  {rank}. {:<18} {:>3} shipments  {rate}  {}",
            supplier.name, supplier.shipments, supplier.main_issue
        );
    }
}

impl DashboardFormatter for TextFormatter {
    fn format(&self, board: &Dashboard) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output, "{} — {}", board.title, board.period.display_name());
        let _ = writeln!(output, "{}", board.subtitle);
        output.push('\n');

        output.push_str("KPI\n");
        for kpi in &board.kpis {
            self.write_kpi(&mut output, kpi);
        }
        output.push('\n');

        for panel in &board.charts {
            self.write_chart(&mut output, panel)?;
            output.push('\n');
        }

        output.push_str("Supplier quality rating\n");
        for (i, supplier) in board.suppliers.iter().enumerate() {
            self.write_supplier(&mut output, i + 1, supplier);
        }
        output.push('\n');

        output.push_str("Recommendations\n");
        for recommendation in &board.recommendations {
            let _ = writeln!(output, "  - {recommendation}");
        }
        output.push('\n');

        let _ = writeln!(
            output,
            "Last updated: {} | Owner: {}",
            board.updated_at, board.owner
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
