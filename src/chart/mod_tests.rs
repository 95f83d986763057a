//! Tests for the proportion chart engine.

use super::*;

fn entry(label: &str, value: f64) -> Entry {
    Entry::new(label, value, "#2563eb")
}

fn sectors(entries: &[Entry]) -> Vec<Slice> {
    match compute_slices(entries).expect("valid entries") {
        ChartOutcome::Sectors(slices) => slices,
        ChartOutcome::NoData => panic!("expected sectors"),
    }
}

mod compute_total_tests {
    use super::*;

    #[test]
    fn sums_all_values() {
        let entries = vec![entry("a", 1.5), entry("b", 2.5), entry("c", 6.0)];
        assert!((compute_total(&entries) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_sums_to_zero() {
        assert!(compute_total(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_values_sum_to_zero() {
        let entries = vec![entry("a", 0.0), entry("b", 0.0)];
        assert!(compute_total(&entries).abs() < f64::EPSILON);
    }
}

mod compute_slices_tests {
    use super::*;

    #[test]
    fn spans_sum_to_full_circle() {
        let entries = vec![
            entry("a", 12.0),
            entry("b", 7.3),
            entry("c", 41.9),
            entry("d", 0.8),
        ];
        let slices = sectors(&entries);

        let span_sum: f64 = slices
            .iter()
            .map(|s| s.end_angle - s.start_angle)
            .sum();
        assert!((span_sum - 360.0).abs() < 1e-6, "span sum was {span_sum}");
    }

    #[test]
    fn accumulation_drift_stays_within_epsilon() {
        // Many equal entries stress float accumulation across the sweep.
        let entries: Vec<Entry> = (0..97).map(|i| entry(&format!("e{i}"), 1.0)).collect();
        let slices = sectors(&entries);

        let last = slices.last().unwrap();
        assert!((last.end_angle - 270.0).abs() < 1e-6);
    }

    #[test]
    fn first_slice_starts_at_twelve_oclock() {
        let slices = sectors(&[entry("a", 3.0), entry("b", 1.0)]);
        assert!((slices[0].start_angle - (-90.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn preserves_input_order_and_colors() {
        let entries = vec![
            Entry::new("first", 5.0, "#ef4444"),
            Entry::new("second", 3.0, "#f59e0b"),
            Entry::new("third", 2.0, "#64748b"),
        ];
        let slices = sectors(&entries);

        assert_eq!(slices.len(), 3);
        for (slice, entry) in slices.iter().zip(&entries) {
            assert_eq!(slice.label, entry.label);
            assert_eq!(slice.color, entry.color);
        }
    }

    #[test]
    fn slices_are_contiguous() {
        let entries = vec![entry("a", 4.0), entry("b", 5.0), entry("c", 6.0)];
        let slices = sectors(&entries);

        for pair in slices.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn scenario_five_entries_totaling_one_hundred() {
        let entries = vec![
            entry("A", 45.0),
            entry("B", 30.0),
            entry("C", 15.0),
            entry("D", 7.0),
            entry("E", 3.0),
        ];
        let slices = sectors(&entries);

        let expected_spans = [162.0, 108.0, 54.0, 25.2, 10.8];
        for (slice, expected) in slices.iter().zip(expected_spans) {
            let span = slice.end_angle - slice.start_angle;
            assert!((span - expected).abs() < 1e-6, "span {span} != {expected}");
        }

        assert!((slices[0].start_angle - (-90.0)).abs() < f64::EPSILON);
        assert!((slices[4].end_angle - 270.0).abs() < 1e-6);
    }

    #[test]
    fn two_equal_entries_split_the_circle() {
        let slices = sectors(&[entry("X", 1.0), entry("Y", 1.0)]);

        for slice in &slices {
            let span = slice.end_angle - slice.start_angle;
            assert!((span - 180.0).abs() < 1e-6);
        }
    }

    #[test]
    fn single_entry_spans_full_circle() {
        let slices = sectors(&[entry("only", 42.0)]);

        assert_eq!(slices.len(), 1);
        let span = slices[0].end_angle - slices[0].start_angle;
        assert!((span - 360.0).abs() < 1e-6);
        assert!(slices[0].large_arc);
    }

    #[test]
    fn full_circle_sector_is_drawn_as_two_arcs() {
        let slices = sectors(&[entry("only", 1.0)]);

        // A single arc with identical endpoints would render nothing.
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
    }

    #[test]
    fn zero_value_entry_keeps_its_position() {
        let entries = vec![entry("a", 5.0), entry("gap", 0.0), entry("b", 5.0)];
        let slices = sectors(&entries);

        assert_eq!(slices.len(), 3);
        let gap = &slices[1];
        assert!((gap.end_angle - gap.start_angle).abs() < f64::EPSILON);
        // The cursor advance is a no-op: the next slice starts where the gap sits.
        assert!((slices[2].start_angle - gap.start_angle).abs() < f64::EPSILON);
    }

    #[test]
    fn all_zero_values_return_no_data() {
        let entries = vec![entry("a", 0.0), entry("b", 0.0)];
        let outcome = compute_slices(&entries).unwrap();

        assert_eq!(outcome, ChartOutcome::NoData);
        assert!(outcome.slices().is_empty());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = compute_slices(&[]).unwrap_err();
        assert!(matches!(err, crate::error::IntakeBoardError::EmptyChart));
    }

    #[test]
    fn negative_value_is_rejected() {
        let entries = vec![entry("ok", 5.0), entry("bad", -1.0)];
        let err = compute_slices(&entries).unwrap_err();

        match err {
            crate::error::IntakeBoardError::NegativeValue { label, value } => {
                assert_eq!(label, "bad");
                assert!((value - (-1.0)).abs() < f64::EPSILON);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let entries = vec![entry("a", 45.0), entry("b", 30.0), entry("c", 25.0)];
        let first = sectors(&entries);
        let second = sectors(&entries);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.start_angle.to_bits(), b.start_angle.to_bits());
            assert_eq!(a.end_angle.to_bits(), b.end_angle.to_bits());
            assert_eq!(a.path, b.path);
        }
    }

    #[test]
    fn large_arc_flag_tracks_half_circle() {
        let slices = sectors(&[entry("big", 70.0), entry("small", 30.0)]);

        assert!(slices[0].large_arc, "252° sector needs the large-arc flag");
        assert!(!slices[1].large_arc, "108° sector does not");
    }

    #[test]
    fn sector_path_moves_to_center_first() {
        let slices = sectors(&[entry("a", 1.0), entry("b", 2.0)]);

        for slice in &slices {
            assert!(slice.path.starts_with("M 50 50 L "));
            assert!(slice.path.contains(" A 45 45 0 "));
            assert!(slice.path.ends_with(" Z"));
        }
    }
}

mod compute_legend_tests {
    use super::*;

    #[test]
    fn percentages_have_one_decimal_place() {
        let entries = vec![
            entry("A", 45.0),
            entry("B", 30.0),
            entry("C", 15.0),
            entry("D", 7.0),
            entry("E", 3.0),
        ];
        let legend = compute_legend(&entries).unwrap();

        let percentages: Vec<&str> = legend.iter().map(|r| r.percentage.as_str()).collect();
        assert_eq!(percentages, ["45.0", "30.0", "15.0", "7.0", "3.0"]);
    }

    #[test]
    fn fifty_fifty_split() {
        let legend = compute_legend(&[entry("X", 1.0), entry("Y", 1.0)]).unwrap();

        assert_eq!(legend[0].percentage, "50.0");
        assert_eq!(legend[1].percentage, "50.0");
    }

    #[test]
    fn rows_match_input_order_and_colors() {
        let entries = vec![
            Entry::new("first", 2.0, "#ef4444"),
            Entry::new("second", 8.0, "#2563eb"),
        ];
        let legend = compute_legend(&entries).unwrap();

        for (row, entry) in legend.iter().zip(&entries) {
            assert_eq!(row.label, entry.label);
            assert_eq!(row.color, entry.color);
            assert!((row.value - entry.value).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn legend_colors_match_slice_colors() {
        let entries = vec![
            Entry::new("a", 3.0, "#ef4444"),
            Entry::new("b", 7.0, "#f59e0b"),
        ];
        let legend = compute_legend(&entries).unwrap();
        let slices = sectors(&entries);

        for (row, slice) in legend.iter().zip(&slices) {
            assert_eq!(row.color, slice.color);
        }
    }

    #[test]
    fn percentages_sum_to_one_hundred_within_rounding() {
        let entries = vec![
            entry("a", 1.0),
            entry("b", 1.0),
            entry("c", 1.0),
            entry("d", 1.0),
            entry("e", 1.0),
            entry("f", 1.0),
            entry("g", 1.0),
        ];
        let legend = compute_legend(&entries).unwrap();

        let sum: f64 = legend
            .iter()
            .map(|r| r.percentage.parse::<f64>().unwrap())
            .sum();
        let tolerance = 0.05 * legend.len() as f64;
        assert!((sum - 100.0).abs() <= tolerance, "sum was {sum}");
    }

    #[test]
    fn legend_share_agrees_with_slice_span() {
        let entries = vec![entry("a", 13.0), entry("b", 29.0), entry("c", 58.0)];
        let legend = compute_legend(&entries).unwrap();
        let slices = sectors(&entries);

        for (row, slice) in legend.iter().zip(&slices) {
            let span = slice.end_angle - slice.start_angle;
            let from_legend = share(row.value, compute_total(&entries)) * 3.6;
            assert!((span - from_legend).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_total_formats_every_row_as_zero() {
        let entries = vec![entry("a", 0.0), entry("b", 0.0)];
        let legend = compute_legend(&entries).unwrap();

        assert_eq!(legend.len(), 2);
        for row in &legend {
            assert_eq!(row.percentage, "0.0");
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(compute_legend(&[]).is_err());
    }

    #[test]
    fn negative_value_is_rejected() {
        assert!(compute_legend(&[entry("bad", -0.5)]).is_err());
    }
}
