//! Tests for the built-in dataset.

use crate::chart::{compute_slices, compute_total};
use crate::model::{dashboard, KpiStatus, Period};

#[test]
fn dataset_has_two_chart_panels() {
    let board = dashboard(Period::Week);

    assert_eq!(board.charts.len(), 2);
    assert_eq!(board.charts[0].title, "Idle time causes");
    assert_eq!(board.charts[1].title, "Discrepancy breakdown");
}

#[test]
fn every_panel_partitions_cleanly() {
    let board = dashboard(Period::Week);

    for panel in &board.charts {
        let outcome = compute_slices(&panel.entries).expect("dataset entries are valid");
        assert!(!outcome.is_no_data());
        assert_eq!(outcome.slices().len(), panel.entries.len());
    }
}

#[test]
fn idle_causes_total_one_hundred() {
    let board = dashboard(Period::Week);
    let total = compute_total(&board.charts[0].entries);
    assert!((total - 100.0).abs() < f64::EPSILON);
}

#[test]
fn discrepancy_total_matches_counts() {
    let board = dashboard(Period::Week);
    let total = compute_total(&board.charts[1].entries);
    assert!((total - 112.0).abs() < f64::EPSILON);
}

#[test]
fn suppliers_are_ranked_by_error_rate() {
    let board = dashboard(Period::Week);

    for pair in board.suppliers.windows(2) {
        assert!(pair[0].error_rate >= pair[1].error_rate);
    }
}

#[test]
fn dataset_carries_a_kpi_breach() {
    let board = dashboard(Period::Week);

    let discrepancy = board
        .kpis
        .iter()
        .find(|kpi| kpi.title == "Discrepancy rate")
        .expect("discrepancy KPI present");
    assert_eq!(discrepancy.status, KpiStatus::Error);
}

#[test]
fn period_is_threaded_through() {
    let board = dashboard(Period::Quarter);
    assert_eq!(board.period, Period::Quarter);
}

#[test]
fn recommendations_are_present() {
    let board = dashboard(Period::Week);
    assert_eq!(board.recommendations.len(), 3);
}
