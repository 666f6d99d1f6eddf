use super::*;
use crate::illustration::scene::Sway;

fn m(height: f64, diameter: f64, leaf_count: u64) -> Measurements {
    Measurements { height, diameter, leaf_count }
}

fn channels(timelines: &[Timeline]) -> Vec<Channel> {
    timelines.iter().map(|t| t.channel).collect()
}

// =============================================================
// Change detection
// =============================================================

#[test]
fn unchanged_snapshot_yields_no_effects() {
    let a = m(130.0, 40.0, 20);
    assert!(detect_transitions(&a, &a).is_empty());
}

#[test]
fn small_changes_stay_below_thresholds() {
    let timelines = detect_transitions(&m(130.0, 40.0, 20), &m(150.0, 55.0, 25));
    assert!(timelines.is_empty());
}

#[test]
fn height_jump_stretches_then_relaxes_foreground() {
    let timelines = detect_transitions(&m(100.0, 40.0, 20), &m(150.0, 40.0, 20));
    assert_eq!(channels(&timelines), vec![Channel::HeightPulse]);

    let mut scene = Scene::new(m(150.0, 40.0, 20));
    project(&mut scene, &timelines[0], 0);
    assert_eq!(scene.foreground[0].scale_y, 1.2);
    assert_eq!(scene.background[0].scale_y, 1.0);

    project(&mut scene, &timelines[0], 300);
    assert_eq!(scene.foreground[0].scale_y, 1.0);
    assert_eq!(scene.foreground[0].transition, Some("transform 0.8s ease-out"));
}

#[test]
fn height_drop_shrinks_foreground() {
    let timelines = detect_transitions(&m(150.0, 40.0, 20), &m(100.0, 40.0, 20));
    let mut scene = Scene::new(m(100.0, 40.0, 20));
    project(&mut scene, &timelines[0], 0);
    assert_eq!(scene.foreground[3].scale_y, 0.9);
}

#[test]
fn diameter_jump_widens_whole_illustration() {
    let timelines = detect_transitions(&m(130.0, 40.0, 20), &m(130.0, 60.0, 20));
    assert_eq!(channels(&timelines), vec![Channel::DiameterPulse]);

    let mut scene = Scene::new(m(130.0, 60.0, 20));
    project(&mut scene, &timelines[0], 499);
    assert_eq!((scene.svg.scale_x, scene.svg.scale_y), (1.15, 1.0));
    assert_eq!(scene.svg.transition, Some("transform 0.5s ease-out"));

    project(&mut scene, &timelines[0], 500);
    assert_eq!(scene.svg.scale_x, 1.0);
    assert_eq!(scene.svg.transition, Some("transform 0.8s ease-out"));
}

#[test]
fn leaf_increase_fades_in_only_new_leaves() {
    let timelines = detect_transitions(&m(130.0, 40.0, 10), &m(130.0, 40.0, 20));
    assert_eq!(channels(&timelines), vec![Channel::LeafFade]);

    // 10 * 0.7 = 7 and 20 * 0.7 = 14: leaves 7..14 are new.
    let mut scene = Scene::new(m(130.0, 40.0, 20));
    project(&mut scene, &timelines[0], 0);
    assert_eq!(scene.foreground[6].opacity, 1.0);
    assert_eq!(scene.foreground[7].opacity, 0.0);
    assert_eq!(scene.foreground[13].opacity, 0.0);
    assert_eq!(scene.foreground[14].opacity, 1.0);

    // Leaf 7 fades at 300 + 50 * 7 = 650 ms.
    project(&mut scene, &timelines[0], 650);
    assert_eq!(scene.foreground[7].opacity, 1.0);
    assert_eq!(scene.foreground[8].opacity, 0.0);
    assert_eq!(timelines[0].duration_ms(), 300 + 50 * 13);
}

#[test]
fn leaf_increase_of_exactly_five_is_ignored() {
    assert!(detect_transitions(&m(130.0, 40.0, 10), &m(130.0, 40.0, 15)).is_empty());
    assert!(detect_transitions(&m(130.0, 40.0, 30), &m(130.0, 40.0, 10)).is_empty());
}

#[test]
fn all_three_effects_can_fire_together() {
    let timelines = detect_transitions(&m(100.0, 20.0, 5), &m(200.0, 100.0, 40));
    assert_eq!(channels(&timelines), vec![Channel::HeightPulse, Channel::DiameterPulse, Channel::LeafFade]);
}

#[test]
fn refresh_applies_steady_state_before_returning_pulses() {
    let mut scene = Scene::new(m(130.0, 40.0, 20));
    let timelines = refresh(&mut scene, &m(130.0, 40.0, 20), &m(130.0, 80.0, 50));
    assert_eq!(scene.measurements, m(130.0, 80.0, 50));
    assert_eq!(scene.details_opacity, 1.0);
    assert_eq!(scene.spines.opacity, 1.0);
    assert_eq!(channels(&timelines), vec![Channel::DiameterPulse, Channel::LeafFade]);
}

// =============================================================
// Celebration
// =============================================================

#[test]
fn celebration_highlights_immediately() {
    let mut scene = Scene::new(m(130.0, 40.0, 20));
    project(&mut scene, &celebration(130.0), 0);
    assert!(scene.growing);
    assert_eq!(scene.svg.filter, CELEBRATION_FILTER);
    assert_eq!((scene.svg.scale_x, scene.svg.scale_y), (1.1, 1.1));
    assert_eq!(scene.spines.stroke, HIGHLIGHT_STROKE);
    assert_eq!((scene.spines.width, scene.tips.width), (1.5, 2.5));
    assert_eq!(scene.details_opacity, 1.0);
}

#[test]
fn celebration_grows_until_peak_then_settles() {
    let timeline = celebration(130.0);
    let mut scene = Scene::new(m(130.0, 40.0, 20));

    project(&mut scene, &timeline, 100);
    assert!((scene.foreground[0].scale_y - 1.03).abs() < 1e-9);
    assert!((scene.background[0].scale_y - 1.03 * 0.9).abs() < 1e-9);
    assert!((scene.height_readout() - 131.5).abs() < 1e-9);

    // Ninth tick crosses 1.25.
    project(&mut scene, &timeline, 900);
    assert!((scene.foreground[0].scale_y - 1.27).abs() < 1e-9);
    assert!((scene.height_readout() - 143.5).abs() < 1e-9);
    assert!(!timeline.cues.iter().any(|c| c.at_ms == 1000));

    project(&mut scene, &timeline, 1700);
    assert_eq!(scene.foreground[0].scale_y, 0.95);
    assert_eq!(scene.background[0].scale_y, 0.95);
    assert_eq!(scene.height_readout(), 130.0);

    project(&mut scene, &timeline, 2300);
    assert_eq!(scene.foreground[0].scale_y, 1.0);
    assert_eq!(scene.svg.scale_x, 1.0);
}

#[test]
fn celebration_readout_is_capped_for_small_plants() {
    let timeline = celebration(20.0);
    let mut scene = Scene::new(m(20.0, 40.0, 20));
    project(&mut scene, &timeline, 900);
    assert!((scene.height_readout() - 26.0).abs() < 1e-9);
}

#[test]
fn celebration_reverts_decoration_at_three_seconds() {
    let timeline = celebration(130.0);
    assert_eq!(timeline.duration_ms(), 3000);

    let mut scene = Scene::new(m(130.0, 40.0, 20));
    project(&mut scene, &timeline, 3000);
    assert!(!scene.growing);
    assert_eq!(scene.svg.filter, RESTING_FILTER);
    assert_eq!(scene.spines.stroke, ACCENT_STROKE);
    assert_eq!((scene.spines.width, scene.tips.width), (1.0, 2.0));
    assert!((scene.spines.opacity - 0.8).abs() < 1e-9);
    assert_eq!(scene.details_opacity, 0.5);
    assert!(scene.foreground[0].sway.is_some());
}

#[test]
fn celebration_supersedes_pulses_but_not_intro() {
    let cancels = Channel::Celebration.cancels();
    assert!(cancels.contains(&Channel::HeightPulse));
    assert!(cancels.contains(&Channel::DiameterPulse));
    assert!(!cancels.contains(&Channel::Intro));
    assert_eq!(Channel::HeightPulse.cancels(), &[Channel::HeightPulse]);
}

// =============================================================
// Intro
// =============================================================

#[test]
fn intro_waits_then_hides_everything() {
    let timeline = intro();
    let mut scene = Scene::new(m(130.0, 40.0, 20));

    project(&mut scene, &timeline, 499);
    assert_eq!(scene.foreground[0].opacity, 1.0);

    project(&mut scene, &timeline, 500);
    assert!(scene.growing);
    assert_eq!(scene.foreground[0].opacity, 0.0);
    assert_eq!(scene.background[0].opacity, 0.0);
    assert_eq!((scene.spines.opacity, scene.tips.opacity), (0.0, 0.0));
    assert_eq!(scene.core_stem_opacity, 0.5);
}

#[test]
fn intro_staggers_background_before_foreground() {
    let timeline = intro();
    let mut scene = Scene::new(m(130.0, 40.0, 20));

    project(&mut scene, &timeline, 800);
    assert_eq!(scene.core_stem_opacity, 1.0);

    // Background leaf 1 at 500 + 600 + 150 ms.
    project(&mut scene, &timeline, 1250);
    assert_eq!(scene.background[1].opacity, 1.0);
    assert_eq!(scene.background[2].opacity, 0.0);
    assert_eq!(scene.foreground[0].opacity, 0.0);

    // Foreground leaf 2 at 500 + 1200 + 360 ms.
    project(&mut scene, &timeline, 2060);
    assert_eq!(scene.foreground[2].opacity, 1.0);
    assert_eq!(scene.foreground[3].opacity, 0.0);
}

#[test]
fn intro_ends_with_sway_and_restored_accents() {
    let timeline = intro();
    let mut scene = Scene::new(m(130.0, 40.0, 20));
    project(&mut scene, &timeline, 5500);
    assert!(!scene.growing);
    assert_eq!(scene.foreground[1].sway, Some(Sway { period_s: 6.0, delay_s: 0.1 }));
    assert!((scene.spines.opacity - 0.8).abs() < 1e-9);
    assert_eq!(scene.tips.opacity, 1.0);
}
