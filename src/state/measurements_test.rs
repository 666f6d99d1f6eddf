use super::*;

fn controls() -> MeasurementControls {
    MeasurementControls::new(&ClientConfig::default())
}

fn set_entries(controls: &mut MeasurementControls, height: &str, diameter: &str, leaves: &str) {
    controls.height.entry = height.to_owned();
    controls.diameter.entry = diameter.to_owned();
    controls.leaf_count.entry = leaves.to_owned();
}

// =============================================================
// Field controls
// =============================================================

#[test]
fn new_controls_start_with_entry_matching_slider() {
    let state = controls();
    assert_eq!(state.height.entry, "120");
    assert_eq!(state.height.slider, 120.0);
    assert_eq!(state.leaf_count.entry, "20");
}

#[test]
fn field_accessors_address_the_right_control() {
    let mut state = controls();
    state.field_mut(MeasurementField::Diameter).slider = 42.0;
    assert_eq!(state.field(MeasurementField::Diameter).slider, 42.0);
    assert_eq!(state.diameter.slider, 42.0);
}

#[test]
fn field_dom_ids_match_wire_names() {
    let ids: Vec<_> = MeasurementField::ALL.iter().map(|f| f.dom_id()).collect();
    assert_eq!(ids, vec!["altura", "diametro", "hojas"]);
}

// =============================================================
// Display resolution
// =============================================================

#[test]
fn display_prefers_parsed_entry() {
    let mut state = controls();
    set_entries(&mut state, "130", "40", "20");
    assert_eq!(state.display_measurements(), Measurements { height: 130.0, diameter: 40.0, leaf_count: 20 });
}

#[test]
fn display_falls_back_to_slider_for_blank_zero_or_junk_entries() {
    let mut state = controls();
    set_entries(&mut state, "", "0", "many");
    let m = state.display_measurements();
    assert_eq!(m.height, 120.0);
    assert_eq!(m.diameter, 80.0);
    assert_eq!(m.leaf_count, 20);
}

#[test]
fn display_reads_negative_leaf_count_as_zero() {
    let mut state = controls();
    state.leaf_count.entry = "-3".to_owned();
    assert_eq!(state.display_measurements().leaf_count, 0);
}

// =============================================================
// Submit resolution + validation
// =============================================================

#[test]
fn submit_uses_entry_then_slider_fallback() {
    let mut state = controls();
    set_entries(&mut state, "130", "", "12.7");
    let raw = state.submit_values();
    assert_eq!(raw.height, Some(130.0));
    assert_eq!(raw.diameter, Some(80.0));
    assert_eq!(raw.leaf_count, Some(12));
}

#[test]
fn submit_does_not_fall_back_on_unparsable_entry() {
    let mut state = controls();
    set_entries(&mut state, "abc", "40", "20");
    assert_eq!(state.submit_values().height, None);
    assert_eq!(state.submit_values().validate(), Err(ValidationError::NotNumeric));
}

#[test]
fn any_non_numeric_field_fails_numeric_validation() {
    for (h, d, n) in [("x", "40", "20"), ("130", "x", "20"), ("130", "40", "x")] {
        let mut state = controls();
        set_entries(&mut state, h, d, n);
        assert_eq!(state.submit_values().validate(), Err(ValidationError::NotNumeric));
    }
}

#[test]
fn zero_or_negative_values_fail_positivity_validation() {
    for (h, d, n) in [("0", "40", "20"), ("130", "-1", "20"), ("130", "40", "0")] {
        let mut state = controls();
        set_entries(&mut state, h, d, n);
        assert_eq!(state.submit_values().validate(), Err(ValidationError::NotPositive));
    }
}

#[test]
fn numeric_check_runs_before_positivity_check() {
    let raw = RawMeasurements { height: Some(0.0), diameter: None, leaf_count: Some(3) };
    assert_eq!(raw.validate(), Err(ValidationError::NotNumeric));
}

#[test]
fn valid_values_produce_measurements() {
    let mut state = controls();
    set_entries(&mut state, "130.5", "40", "20");
    assert_eq!(
        state.submit_values().validate(),
        Ok(Measurements { height: 130.5, diameter: 40.0, leaf_count: 20 })
    );
}

#[test]
fn leaf_counts_beyond_u32_survive_validation() {
    let mut state = controls();
    set_entries(&mut state, "130", "40", "5000000000");
    let measurements = state.submit_values().validate().expect("valid measurements");
    assert_eq!(measurements.leaf_count, 5_000_000_000);
}

#[test]
fn leaf_counts_beyond_u32_survive_display() {
    let mut state = controls();
    state.leaf_count.entry = "5000000000".to_owned();
    assert_eq!(state.display_measurements().leaf_count, 5_000_000_000);
}
