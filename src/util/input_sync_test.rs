use super::*;
use crate::config::{FieldDefaults, SliderBounds};

fn height_control() -> FieldControl {
    FieldControl::new(FieldDefaults {
        bounds: SliderBounds { min: 10.0, max: 300.0, step: 0.1 },
        initial: 120.0,
    })
}

// =============================================================
// Lenient parsing
// =============================================================

#[test]
fn parse_float_lenient_reads_numeric_prefix() {
    assert_eq!(parse_float_lenient("130"), Some(130.0));
    assert_eq!(parse_float_lenient("  42.5cm"), Some(42.5));
    assert_eq!(parse_float_lenient("-3.5e2x"), Some(-350.0));
    assert_eq!(parse_float_lenient(".5"), Some(0.5));
    assert_eq!(parse_float_lenient("7."), Some(7.0));
    assert_eq!(parse_float_lenient("1e"), Some(1.0));
    assert_eq!(parse_float_lenient("Infinity"), Some(f64::INFINITY));
}

#[test]
fn parse_float_lenient_rejects_non_numbers() {
    assert_eq!(parse_float_lenient(""), None);
    assert_eq!(parse_float_lenient("   "), None);
    assert_eq!(parse_float_lenient("abc"), None);
    assert_eq!(parse_float_lenient("-"), None);
    assert_eq!(parse_float_lenient("."), None);
}

#[test]
fn parse_int_lenient_truncates_at_first_non_digit() {
    assert_eq!(parse_int_lenient("20"), Some(20));
    assert_eq!(parse_int_lenient("12.7"), Some(12));
    assert_eq!(parse_int_lenient(" -4 hojas"), Some(-4));
    assert_eq!(parse_int_lenient("hojas"), None);
    assert_eq!(parse_int_lenient(".5"), None);
}

#[test]
fn parse_int_lenient_saturates_long_runs() {
    assert_eq!(parse_int_lenient("99999999999999999999999"), Some(i64::MAX));
}

// =============================================================
// Slider ⇄ entry
// =============================================================

#[test]
fn slider_input_copies_value_into_entry() {
    let mut control = height_control();
    assert_eq!(apply_slider_input(&mut control, "150.5"), SyncOutcome::Refresh);
    assert_eq!(control.entry, "150.5");
    assert_eq!(control.slider, 150.5);
}

#[test]
fn entry_within_bounds_updates_slider() {
    let mut control = height_control();
    for value in [10.0, 55.5, 130.0, 299.9, 300.0] {
        let raw = value.to_string();
        assert_eq!(apply_entry_input(&mut control, &raw), SyncOutcome::Refresh);
        assert_eq!(control.slider, value);

        assert_eq!(apply_slider_input(&mut control, &raw), SyncOutcome::Refresh);
        assert_eq!(control.entry, raw);
    }
}

#[test]
fn entry_outside_bounds_is_clamped_into_slider_only() {
    let mut control = height_control();
    assert_eq!(apply_entry_input(&mut control, "999"), SyncOutcome::Refresh);
    assert_eq!(control.slider, 300.0);
    assert_eq!(control.entry, "999");

    assert_eq!(apply_entry_input(&mut control, "2"), SyncOutcome::Refresh);
    assert_eq!(control.slider, 10.0);
}

#[test]
fn invalid_entry_leaves_slider_untouched_and_skips_refresh() {
    let mut control = height_control();
    assert_eq!(apply_entry_input(&mut control, "abc"), SyncOutcome::Skip);
    assert_eq!(control.slider, 120.0);
    assert_eq!(control.entry, "abc");

    assert_eq!(apply_entry_input(&mut control, ""), SyncOutcome::Skip);
    assert_eq!(control.slider, 120.0);
    assert!(control.entry.is_empty());
}
