//! Dashboard data model: KPI tiles, chart panels, supplier ratings, and
//! narrative recommendations.

mod dataset;

pub use dataset::dashboard;

use serde::Serialize;

use crate::chart::Entry;

/// Reporting period shown in the dashboard header. Cosmetic: the built-in
/// dataset does not change with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Today,
    #[default]
    Week,
    Month,
    Quarter,
}

impl Period {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This week",
            Self::Month => "This month",
            Self::Quarter => "This quarter",
        }
    }
}

/// KPI health relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiStatus {
    Success,
    Warning,
    Error,
}

/// One KPI tile.
#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    pub title: String,
    /// Pre-formatted display value, e.g. `"12.5"`.
    pub value: String,
    pub unit: String,
    /// Target description, e.g. `"< 15 min"`.
    pub target: String,
    pub status: KpiStatus,
    /// Week-over-week change in percent; negative is a decrease.
    pub trend: Option<f64>,
}

/// One proportion chart panel: a title plus the ordered entries handed to the
/// chart engine.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPanel {
    pub title: String,
    pub entries: Vec<Entry>,
}

/// One row of the supplier quality table, ranked by error rate.
#[derive(Debug, Clone, Serialize)]
pub struct Supplier {
    pub name: String,
    pub shipments: u32,
    /// Share of shipments with discrepancies, in percent.
    pub error_rate: f64,
    pub main_issue: String,
}

impl Supplier {
    /// Severity bucket for the error-rate cell: above 6% is critical, above
    /// 4% needs attention, the rest is healthy.
    #[must_use]
    pub fn severity(&self) -> KpiStatus {
        if self.error_rate > 6.0 {
            KpiStatus::Error
        } else if self.error_rate > 4.0 {
            KpiStatus::Warning
        } else {
            KpiStatus::Success
        }
    }
}

/// The complete dashboard handed to a formatter.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub subtitle: String,
    pub period: Period,
    pub kpis: Vec<Kpi>,
    pub charts: Vec<ChartPanel>,
    pub suppliers: Vec<Supplier>,
    pub recommendations: Vec<String>,
    pub updated_at: String,
    pub owner: String,
}

impl Dashboard {
    /// Whether any KPI is in [`KpiStatus::Error`]; drives the strict exit code.
    #[must_use]
    pub fn has_kpi_alerts(&self) -> bool {
        self.kpis.iter().any(|kpi| kpi.status == KpiStatus::Error)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
