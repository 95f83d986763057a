//! Proportion chart engine.
//!
//! Transforms an ordered sequence of [`Entry`] values into the angular
//! partition of a circle: one [`Slice`] per entry, in input order, plus a
//! legend and the aggregate total. Stateless and idempotent; every call
//! recomputes from scratch and returns freshly allocated output.

mod types;

pub use types::{ChartOutcome, Entry, LegendRow, Slice};

use crate::error::{IntakeBoardError, Result};

/// Side length of the square chart viewport.
pub const VIEWBOX_SIZE: f64 = 100.0;
/// Circle center on both axes.
pub const CENTER: f64 = 50.0;
/// Circle radius.
pub const RADIUS: f64 = 45.0;
/// Angular cursor start: 12 o'clock, i.e. −90° from the 3 o'clock zero reference.
pub const START_ANGLE_DEG: f64 = -90.0;

const FULL_CIRCLE_DEG: f64 = 360.0;
const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Sum of all entry values. Recomputed per render, never cached.
///
/// The single source of the denominator for [`compute_slices`] and
/// [`compute_legend`], so both agree on every percentage.
#[must_use]
pub fn compute_total(entries: &[Entry]) -> f64 {
    entries.iter().map(|entry| entry.value).sum()
}

/// Partition the circle over `entries`, in input order, starting at 12 o'clock.
///
/// Returns [`ChartOutcome::NoData`] when the total is zero; zero-valued
/// entries produce zero-span slices that still occupy a position in the
/// output. The spans of all slices sum to 360° within float tolerance.
///
/// # Errors
/// [`IntakeBoardError::EmptyChart`] for an empty sequence,
/// [`IntakeBoardError::NegativeValue`] for any negative entry value.
pub fn compute_slices(entries: &[Entry]) -> Result<ChartOutcome> {
    validate(entries)?;

    let total = compute_total(entries);
    if total == 0.0 {
        return Ok(ChartOutcome::NoData);
    }

    let (slices, _) = entries.iter().fold(
        (Vec::with_capacity(entries.len()), START_ANGLE_DEG),
        |(mut slices, cursor), entry| {
            let span = share(entry.value, total) / 100.0 * FULL_CIRCLE_DEG;
            slices.push(sector(entry, cursor, span));
            (slices, cursor + span)
        },
    );

    Ok(ChartOutcome::Sectors(slices))
}

/// Legend rows in input order, percentages formatted to one decimal place.
///
/// A zero total yields `"0.0"` for every row instead of dividing by zero.
///
/// # Errors
/// Same input validation as [`compute_slices`].
pub fn compute_legend(entries: &[Entry]) -> Result<Vec<LegendRow>> {
    validate(entries)?;

    let total = compute_total(entries);
    let rows = entries
        .iter()
        .map(|entry| {
            let pct = if total == 0.0 {
                0.0
            } else {
                share(entry.value, total)
            };
            LegendRow {
                label: entry.label.clone(),
                value: entry.value,
                percentage: format!("{pct:.1}"),
                color: entry.color.clone(),
            }
        })
        .collect();

    Ok(rows)
}

fn validate(entries: &[Entry]) -> Result<()> {
    if entries.is_empty() {
        return Err(IntakeBoardError::EmptyChart);
    }
    if let Some(entry) = entries.iter().find(|entry| entry.value < 0.0) {
        return Err(IntakeBoardError::NegativeValue {
            label: entry.label.clone(),
            value: entry.value,
        });
    }
    Ok(())
}

/// Percentage share of `value` in `total`.
fn share(value: f64, total: f64) -> f64 {
    value / total * 100.0
}

fn sector(entry: &Entry, start: f64, span: f64) -> Slice {
    let end = start + span;
    Slice {
        label: entry.label.clone(),
        start_angle: start,
        end_angle: end,
        large_arc: span > 180.0,
        path: sector_path(start, end, span),
        color: entry.color.clone(),
    }
}

fn sector_path(start: f64, end: f64, span: f64) -> String {
    let (x1, y1) = point_on_circle(start);

    // A sector spanning the whole circle would collapse to an empty arc
    // (start == end), so it is drawn as two half-circle arcs instead.
    if span >= FULL_CIRCLE_DEG - FULL_CIRCLE_EPSILON {
        let (xm, ym) = point_on_circle(start + 180.0);
        return format!(
            "M {CENTER} {CENTER} L {x1} {y1} A {RADIUS} {RADIUS} 0 1 1 {xm} {ym} A {RADIUS} {RADIUS} 0 1 1 {x1} {y1} Z"
        );
    }

    let (x2, y2) = point_on_circle(end);
    let large_arc = u8::from(span > 180.0);
    format!(
        "M {CENTER} {CENTER} L {x1} {y1} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2} {y2} Z"
    )
}

fn point_on_circle(angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (
        round_coord(RADIUS.mul_add(rad.cos(), CENTER)),
        round_coord(RADIUS.mul_add(rad.sin(), CENTER)),
    )
}

/// Round path coordinates to three decimals; keeps path text compact without
/// visible loss at a 100×100 viewport.
fn round_coord(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
