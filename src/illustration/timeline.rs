//! Timed illustration effects as cue lists.
//!
//! A [`Timeline`] is plain data: offsets from its start plus the [`SceneOp`]
//! to apply at each offset. Building timelines is pure; the player owns the
//! clock. [`project`] replays a timeline up to a playhead: the player uses it
//! for the cues due at once, and tests sample any instant without timers.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use super::geometry::{BACKGROUND_LEAF_COUNT, FOREGROUND_LEAF_COUNT};
use super::scene::{
    ACCENT_STROKE, CELEBRATION_FILTER, HIGHLIGHT_STROKE, LeafLayer, RESTING_FILTER, SPINE_WIDTH, Scene, SceneOp,
    TIP_WIDTH,
};
use crate::state::measurements::Measurements;

const HEIGHT_PULSE_THRESHOLD: f64 = 20.0;
const DIAMETER_PULSE_THRESHOLD: f64 = 15.0;
const LEAF_FADE_THRESHOLD: u64 = 5;

const GROWTH_TICK_MS: u32 = 100;
const GROWTH_STEP: f64 = 0.03;
const GROWTH_PEAK: f64 = 1.25;
const CELEBRATION_END_MS: u32 = 3000;

const INTRO_DELAY_MS: u32 = 500;
const INTRO_SWAY_MS: u32 = 5000;

/// Independent lanes of timed effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Intro,
    HeightPulse,
    DiameterPulse,
    LeafFade,
    Celebration,
}

impl Channel {
    /// Channels whose pending cues are dropped when a timeline starts on `self`.
    pub fn cancels(self) -> &'static [Channel] {
        match self {
            Self::Intro => &[Self::Intro],
            Self::HeightPulse => &[Self::HeightPulse],
            Self::DiameterPulse => &[Self::DiameterPulse],
            Self::LeafFade => &[Self::LeafFade],
            Self::Celebration => &[Self::Celebration, Self::HeightPulse, Self::DiameterPulse],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cue {
    pub at_ms: u32,
    pub op: SceneOp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    pub channel: Channel,
    pub cues: Vec<Cue>,
}

impl Timeline {
    pub fn new(channel: Channel) -> Self {
        Self { channel, cues: Vec::new() }
    }

    pub fn at(mut self, at_ms: u32, op: SceneOp) -> Self {
        self.push(at_ms, op);
        self
    }

    pub fn push(&mut self, at_ms: u32, op: SceneOp) {
        self.cues.push(Cue { at_ms, op });
    }

    /// Offset of the last cue.
    pub fn duration_ms(&self) -> u32 {
        self.cues.iter().map(|c| c.at_ms).max().unwrap_or(0)
    }
}

/// Apply every cue at or before `playhead_ms`, in time order.
///
/// Cues sharing an offset keep their insertion order, matching the firing
/// order of timers registered with equal delays.
pub fn project(scene: &mut Scene, timeline: &Timeline, playhead_ms: u32) {
    let mut due: Vec<&Cue> = timeline.cues.iter().filter(|c| c.at_ms <= playhead_ms).collect();
    due.sort_by_key(|c| c.at_ms);
    for cue in due {
        scene.apply(&cue.op);
    }
}

// =============================================================
// Change pulses
// =============================================================

/// Effects triggered by a significant change between two snapshots.
///
/// Each effect is gated on its own; an unchanged snapshot yields nothing.
pub fn detect_transitions(previous: &Measurements, current: &Measurements) -> Vec<Timeline> {
    let mut timelines = Vec::new();

    let dh = current.height - previous.height;
    if dh.abs() > HEIGHT_PULSE_THRESHOLD {
        let stretch = if dh > 0.0 { 1.2 } else { 0.9 };
        timelines.push(
            Timeline::new(Channel::HeightPulse)
                .at(0, SceneOp::ScaleLeaves { layer: LeafLayer::Foreground, scale_y: stretch, transition: None })
                .at(
                    300,
                    SceneOp::ScaleLeaves {
                        layer: LeafLayer::Foreground,
                        scale_y: 1.0,
                        transition: Some("transform 0.8s ease-out"),
                    },
                ),
        );
    }

    let dd = current.diameter - previous.diameter;
    if dd.abs() > DIAMETER_PULSE_THRESHOLD {
        let widen = if dd > 0.0 { 1.15 } else { 0.9 };
        timelines.push(
            Timeline::new(Channel::DiameterPulse)
                .at(
                    0,
                    SceneOp::ScaleIllustration { scale_x: widen, scale_y: 1.0, transition: Some("transform 0.5s ease-out") },
                )
                .at(
                    500,
                    SceneOp::ScaleIllustration { scale_x: 1.0, scale_y: 1.0, transition: Some("transform 0.8s ease-out") },
                ),
        );
    }

    if current.leaf_count > previous.leaf_count.saturating_add(LEAF_FADE_THRESHOLD) {
        timelines.push(leaf_fade(previous.leaf_count, current.leaf_count));
    }

    timelines
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn leaf_fade(previous: u64, current: u64) -> Timeline {
    let from = previous as f64 * 0.7;
    let to = current as f64 * 0.7;
    let mut timeline = Timeline::new(Channel::LeafFade);
    for i in (0..FOREGROUND_LEAF_COUNT).filter(|&i| (i as f64) >= from && (i as f64) < to) {
        timeline.push(0, SceneOp::SetLeafOpacity { layer: LeafLayer::Foreground, index: i, opacity: 0.0, transition: None });
        timeline.push(
            300 + 50 * i as u32,
            SceneOp::SetLeafOpacity {
                layer: LeafLayer::Foreground,
                index: i,
                opacity: 1.0,
                transition: Some("opacity 0.8s ease-out"),
            },
        );
    }
    timeline
}

/// Re-apply the steady state for `current` and return the pulses the change
/// from `previous` calls for.
pub fn refresh(scene: &mut Scene, previous: &Measurements, current: &Measurements) -> Vec<Timeline> {
    scene.apply_steady_state(current);
    detect_transitions(previous, current)
}

// =============================================================
// Celebration
// =============================================================

fn scale_both_layers(timeline: &mut Timeline, at_ms: u32, scale_y: f64, transition: Option<&'static str>) {
    timeline.push(at_ms, SceneOp::ScaleLeaves { layer: LeafLayer::Foreground, scale_y, transition });
    timeline.push(at_ms, SceneOp::ScaleLeaves { layer: LeafLayer::Background, scale_y: scale_y * 0.9, transition });
}

/// Post-success growth flourish for a plant whose readout shows `height`.
pub fn celebration(height: f64) -> Timeline {
    let mut timeline = Timeline::new(Channel::Celebration)
        .at(0, SceneOp::SetGrowing(true))
        .at(0, SceneOp::ScaleIllustration { scale_x: 1.1, scale_y: 1.1, transition: Some("all 0.8s ease-out") })
        .at(0, SceneOp::SetFilter(CELEBRATION_FILTER))
        .at(0, SceneOp::SetAccentStroke { stroke: HIGHLIGHT_STROKE, spine_width: 1.5, tip_width: 2.5 })
        .at(0, SceneOp::SetAccentOpacity { spines: 1.0, tips: 1.0 })
        .at(0, SceneOp::SetDetailsOpacity(1.0));

    let mut scale = 1.0;
    let mut tick_ms = 0;
    loop {
        tick_ms += GROWTH_TICK_MS;
        scale += GROWTH_STEP;
        scale_both_layers(&mut timeline, tick_ms, scale, None);
        let readout = (height * 1.3).min(height + (scale - 1.0) * 50.0);
        timeline.push(tick_ms, SceneOp::SetHeightReadout(Some(readout)));
        if scale >= GROWTH_PEAK {
            break;
        }
    }

    let settle_ms = tick_ms + 800;
    timeline.push(settle_ms, SceneOp::ScaleLeaves { layer: LeafLayer::Foreground, scale_y: 0.95, transition: Some("transform 0.6s ease-out") });
    timeline.push(settle_ms, SceneOp::ScaleLeaves { layer: LeafLayer::Background, scale_y: 0.95, transition: Some("transform 0.6s ease-out") });
    timeline.push(settle_ms, SceneOp::SetHeightReadout(None));

    let rest_ms = settle_ms + 600;
    timeline.push(rest_ms, SceneOp::ScaleLeaves { layer: LeafLayer::Foreground, scale_y: 1.0, transition: None });
    timeline.push(rest_ms, SceneOp::ScaleLeaves { layer: LeafLayer::Background, scale_y: 1.0, transition: None });
    timeline.push(rest_ms, SceneOp::ScaleIllustration { scale_x: 1.0, scale_y: 1.0, transition: None });

    timeline
        .at(CELEBRATION_END_MS, SceneOp::SetGrowing(false))
        .at(CELEBRATION_END_MS, SceneOp::SetFilter(RESTING_FILTER))
        .at(
            CELEBRATION_END_MS,
            SceneOp::SetAccentStroke { stroke: ACCENT_STROKE, spine_width: SPINE_WIDTH, tip_width: TIP_WIDTH },
        )
        .at(CELEBRATION_END_MS, SceneOp::StartSway)
        .at(CELEBRATION_END_MS, SceneOp::Refresh)
}

// =============================================================
// Intro
// =============================================================

/// One-time staggered fade-in played when the page mounts.
#[allow(clippy::cast_possible_truncation)]
pub fn intro() -> Timeline {
    let start = INTRO_DELAY_MS;
    let mut timeline = Timeline::new(Channel::Intro)
        .at(start, SceneOp::SetLayerOpacity { layer: LeafLayer::Foreground, opacity: 0.0 })
        .at(start, SceneOp::SetLayerOpacity { layer: LeafLayer::Background, opacity: 0.0 })
        .at(start, SceneOp::SetAccentOpacity { spines: 0.0, tips: 0.0 })
        .at(start, SceneOp::SetCoreStemOpacity(0.5))
        .at(start, SceneOp::SetGrowing(true))
        .at(start + 300, SceneOp::SetCoreStemOpacity(1.0));

    for i in 0..BACKGROUND_LEAF_COUNT {
        let op = SceneOp::SetLeafOpacity { layer: LeafLayer::Background, index: i, opacity: 1.0, transition: None };
        timeline.push(start + 600 + 150 * i as u32, op);
    }
    for i in 0..FOREGROUND_LEAF_COUNT {
        let op = SceneOp::SetLeafOpacity { layer: LeafLayer::Foreground, index: i, opacity: 1.0, transition: None };
        timeline.push(start + 1200 + 180 * i as u32, op);
    }

    // Accents come back with the sway; the steady state then caps the spines.
    let end = start + INTRO_SWAY_MS;
    timeline
        .at(end, SceneOp::SetGrowing(false))
        .at(end, SceneOp::StartSway)
        .at(end, SceneOp::SetAccentOpacity { spines: 1.0, tips: 1.0 })
        .at(end, SceneOp::Refresh)
}
