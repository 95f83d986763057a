use serde::Serialize;

use crate::chart::{self, ChartOutcome, LegendRow};
use crate::error::Result;
use crate::model::{Dashboard, Kpi, Period, Supplier};

use super::DashboardFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: &'a str,
    subtitle: &'a str,
    period: Period,
    kpis: &'a [Kpi],
    charts: Vec<ChartReport<'a>>,
    suppliers: &'a [Supplier],
    recommendations: &'a [String],
    updated_at: &'a str,
    owner: &'a str,
}

/// One chart panel with its computed geometry attached.
#[derive(Serialize)]
struct ChartReport<'a> {
    title: &'a str,
    total: f64,
    outcome: ChartOutcome,
    legend: Vec<LegendRow>,
}

impl DashboardFormatter for JsonFormatter {
    fn format(&self, board: &Dashboard) -> Result<String> {
        let charts = board
            .charts
            .iter()
            .map(|panel| {
                Ok(ChartReport {
                    title: panel.title.as_str(),
                    total: chart::compute_total(&panel.entries),
                    outcome: chart::compute_slices(&panel.entries)?,
                    legend: chart::compute_legend(&panel.entries)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let output = JsonOutput {
            title: &board.title,
            subtitle: &board.subtitle,
            period: board.period,
            kpis: &board.kpis,
            charts,
            suppliers: &board.suppliers,
            recommendations: &board.recommendations,
            updated_at: &board.updated_at,
            owner: &board.owner,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
