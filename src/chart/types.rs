//! Chart data model: entries in, slices and legend rows out.

use serde::Serialize;

/// One labeled numeric contribution to a proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Display name, shown in the legend and tooltips.
    pub label: String,
    /// Non-negative contribution to the total.
    pub value: f64,
    /// Opaque color token (hex string or CSS value), used as-is for the
    /// wedge fill and the legend swatch.
    pub color: String,
}

impl Entry {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Angular sector derived from one entry's share of the total.
///
/// Transient render artifact: fully determined by the entry sequence and its
/// total, recomputed on every draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    /// Sweep start in degrees. 0° is 3 o'clock; the first slice starts at −90°.
    pub start_angle: f64,
    /// Sweep end in degrees; equals the next slice's start.
    pub end_angle: f64,
    /// Whether the sector spans more than 180°, for the SVG arc large-arc flag.
    pub large_arc: bool,
    /// SVG path data: move-to center, line-to arc start, arc-to arc end, close.
    pub path: String,
    pub color: String,
}

/// One legend row pairing an entry's label and value with its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    pub label: String,
    pub value: f64,
    /// Share of the total formatted to one decimal place, e.g. `"45.0"`.
    pub percentage: String,
    pub color: String,
}

/// Result of partitioning the circle over an entry sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartOutcome {
    /// Sectors partitioning the full circle, in input order.
    Sectors(Vec<Slice>),
    /// All entry values were zero; there is no proportion to draw.
    NoData,
}

impl ChartOutcome {
    /// Slices to draw, empty for [`ChartOutcome::NoData`].
    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        match self {
            Self::Sectors(slices) => slices,
            Self::NoData => &[],
        }
    }

    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
