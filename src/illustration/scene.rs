//! Presentation attributes of the illustration and the steady-state mapping.
//!
//! `Scene` is the single bound handle to every shape's attributes. The SVG
//! component only reads it; measurement refreshes and timeline cues are the
//! only writers.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use super::geometry;
use crate::state::measurements::Measurements;
use crate::util::color::adjust_color_saturation;

pub const RESTING_FILTER: &str = "drop-shadow(0 4px 6px rgba(0, 0, 0, 0.2))";
pub const CELEBRATION_FILTER: &str = "drop-shadow(0 6px 12px rgba(77, 128, 97, 0.8)) brightness(1.3) saturate(1.2)";
pub const ACCENT_STROKE: &str = "#2D4D3A";
pub const HIGHLIGHT_STROKE: &str = "#1D3D2A";
pub const SPINE_WIDTH: f64 = 1.0;
pub const TIP_WIDTH: f64 = 2.0;

// =============================================================
// Steady-state mapping
// =============================================================

#[allow(clippy::cast_precision_loss)]
pub fn spine_opacity(leaf_count: u64) -> f64 {
    (leaf_count as f64 / 25.0).min(1.0)
}

pub fn detail_opacity(diameter: f64) -> f64 {
    (diameter / 80.0).min(1.0)
}

#[allow(clippy::cast_precision_loss)]
pub fn foreground_leaf_visible(index: usize, leaf_count: u64) -> bool {
    (index as f64) < leaf_count as f64 * 0.7
}

#[allow(clippy::cast_precision_loss)]
pub fn background_leaf_visible(index: usize, diameter: f64) -> bool {
    (index as f64) < diameter / 20.0
}

/// Taller plants read as more mature: saturation scales with height around 120 cm.
pub fn maturity_saturation_percent(height: f64) -> f64 {
    100.0 + (height - 120.0) / 3.0
}

/// Core ellipse `(rx, ry)`.
pub fn core_radii(diameter: f64) -> (f64, f64) {
    let rx = 10.0 + diameter / 15.0;
    (rx, rx * 0.7)
}

pub fn stem_width(height: f64) -> f64 {
    (5.0 + height / 60.0).clamp(3.0, 10.0)
}

// =============================================================
// Attribute model
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeafLayer {
    Foreground,
    Background,
}

/// Idle oscillation of one leaf (CSS `leafSway` keyframes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sway {
    pub period_s: f64,
    pub delay_s: f64,
}

impl Sway {
    #[allow(clippy::cast_precision_loss)]
    pub fn for_leaf(index: usize) -> Self {
        Self { period_s: 5.0 + (index % 3) as f64, delay_s: index as f64 * 0.1 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeafAttrs {
    pub visible: bool,
    pub fill: String,
    pub opacity: f64,
    pub scale_y: f64,
    pub transition: Option<&'static str>,
    pub sway: Option<Sway>,
}

impl LeafAttrs {
    fn new(fill: &str) -> Self {
        Self { visible: true, fill: fill.to_owned(), opacity: 1.0, scale_y: 1.0, transition: None, sway: None }
    }

    /// Inline CSS for the leaf `<path>`.
    pub fn style(&self) -> String {
        // Leaves stretch from the base of the fan.
        let (origin_x, origin_y) = geometry::PIVOT;
        let mut css = format!(
            "display: {}; opacity: {}; transform: scaleY({}); transform-origin: {origin_x}px {origin_y}px;",
            if self.visible { "block" } else { "none" },
            self.opacity,
            self.scale_y,
        );
        if let Some(transition) = self.transition {
            css.push_str(&format!(" transition: {transition};"));
        }
        if let Some(sway) = self.sway {
            css.push_str(&format!(
                " animation: leafSway {}s ease-in-out infinite; animation-delay: {}s;",
                sway.period_s, sway.delay_s
            ));
        }
        css
    }
}

/// Stroke styling shared by the spine and tip groups.
#[derive(Clone, Debug, PartialEq)]
pub struct AccentAttrs {
    pub opacity: f64,
    pub stroke: &'static str,
    pub width: f64,
}

/// Transform and filter applied to the whole `<svg>`.
#[derive(Clone, Debug, PartialEq)]
pub struct IllustrationTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub transition: Option<&'static str>,
    pub filter: &'static str,
}

impl IllustrationTransform {
    pub fn style(&self) -> String {
        let mut css = format!("transform: scale({}, {}); filter: {};", self.scale_x, self.scale_y, self.filter);
        if let Some(transition) = self.transition {
            css.push_str(&format!(" transition: {transition};"));
        }
        css
    }
}

/// One timed change to the scene, applied when its cue fires.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// `transition: None` keeps whatever transition the leaves already carry.
    ScaleLeaves { layer: LeafLayer, scale_y: f64, transition: Option<&'static str> },
    SetLeafOpacity { layer: LeafLayer, index: usize, opacity: f64, transition: Option<&'static str> },
    SetLayerOpacity { layer: LeafLayer, opacity: f64 },
    ScaleIllustration { scale_x: f64, scale_y: f64, transition: Option<&'static str> },
    SetFilter(&'static str),
    /// Toggles the `growing-agave` container class.
    SetGrowing(bool),
    SetAccentOpacity { spines: f64, tips: f64 },
    SetAccentStroke { stroke: &'static str, spine_width: f64, tip_width: f64 },
    SetDetailsOpacity(f64),
    SetCoreStemOpacity(f64),
    /// `Some` overrides the height readout; `None` restores the measured value.
    SetHeightReadout(Option<f64>),
    StartSway,
    /// Re-apply the steady-state mapping for the current measurements.
    Refresh,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub measurements: Measurements,
    pub foreground: Vec<LeafAttrs>,
    pub background: Vec<LeafAttrs>,
    pub spines: AccentAttrs,
    pub tips: AccentAttrs,
    pub details_opacity: f64,
    pub core_radii: (f64, f64),
    pub core_stem_opacity: f64,
    pub stem_width: f64,
    pub svg: IllustrationTransform,
    pub growing: bool,
    pub height_readout_override: Option<f64>,
}

impl Scene {
    pub fn new(measurements: Measurements) -> Self {
        let foreground = geometry::foreground_leaves().iter().map(|l| LeafAttrs::new(l.base_fill)).collect();
        let background = geometry::background_leaves().iter().map(|l| LeafAttrs::new(l.base_fill)).collect();
        let mut scene = Self {
            measurements,
            foreground,
            background,
            spines: AccentAttrs { opacity: 1.0, stroke: ACCENT_STROKE, width: SPINE_WIDTH },
            tips: AccentAttrs { opacity: 1.0, stroke: ACCENT_STROKE, width: TIP_WIDTH },
            details_opacity: 1.0,
            core_radii: core_radii(measurements.diameter),
            core_stem_opacity: 1.0,
            stem_width: stem_width(measurements.height),
            svg: IllustrationTransform { scale_x: 1.0, scale_y: 1.0, transition: None, filter: RESTING_FILTER },
            growing: false,
            height_readout_override: None,
        };
        scene.apply_steady_state(&measurements);
        scene
    }

    /// Map measurements onto shape attributes.
    ///
    /// Visible foreground leaves have their saturation rescaled relative to
    /// the fill they currently carry, so repeated refreshes compound.
    pub fn apply_steady_state(&mut self, m: &Measurements) {
        self.measurements = *m;
        self.spines.opacity = spine_opacity(m.leaf_count);
        self.details_opacity = detail_opacity(m.diameter);

        let percent = maturity_saturation_percent(m.height);
        for (i, leaf) in self.foreground.iter_mut().enumerate() {
            leaf.visible = foreground_leaf_visible(i, m.leaf_count);
            if leaf.visible {
                leaf.fill = adjust_color_saturation(&leaf.fill, percent);
            }
        }
        for (i, leaf) in self.background.iter_mut().enumerate() {
            leaf.visible = background_leaf_visible(i, m.diameter);
        }

        self.core_radii = core_radii(m.diameter);
        self.stem_width = stem_width(m.height);
    }

    pub fn apply(&mut self, op: &SceneOp) {
        match op {
            SceneOp::ScaleLeaves { layer, scale_y, transition } => {
                for leaf in self.leaves_mut(*layer) {
                    leaf.scale_y = *scale_y;
                    if transition.is_some() {
                        leaf.transition = *transition;
                    }
                }
            }
            SceneOp::SetLeafOpacity { layer, index, opacity, transition } => {
                if let Some(leaf) = self.leaves_mut(*layer).get_mut(*index) {
                    leaf.opacity = *opacity;
                    if transition.is_some() {
                        leaf.transition = *transition;
                    }
                }
            }
            SceneOp::SetLayerOpacity { layer, opacity } => {
                for leaf in self.leaves_mut(*layer) {
                    leaf.opacity = *opacity;
                }
            }
            SceneOp::ScaleIllustration { scale_x, scale_y, transition } => {
                self.svg.scale_x = *scale_x;
                self.svg.scale_y = *scale_y;
                if transition.is_some() {
                    self.svg.transition = *transition;
                }
            }
            SceneOp::SetFilter(filter) => self.svg.filter = filter,
            SceneOp::SetGrowing(growing) => self.growing = *growing,
            SceneOp::SetAccentOpacity { spines, tips } => {
                self.spines.opacity = *spines;
                self.tips.opacity = *tips;
            }
            SceneOp::SetAccentStroke { stroke, spine_width, tip_width } => {
                self.spines.stroke = stroke;
                self.spines.width = *spine_width;
                self.tips.stroke = stroke;
                self.tips.width = *tip_width;
            }
            SceneOp::SetDetailsOpacity(opacity) => self.details_opacity = *opacity,
            SceneOp::SetCoreStemOpacity(opacity) => self.core_stem_opacity = *opacity,
            SceneOp::SetHeightReadout(value) => self.height_readout_override = *value,
            SceneOp::StartSway => {
                for (i, leaf) in self.foreground.iter_mut().enumerate() {
                    leaf.sway = Some(Sway::for_leaf(i));
                }
            }
            SceneOp::Refresh => {
                let m = self.measurements;
                self.apply_steady_state(&m);
            }
        }
    }

    /// Height shown in the readout, including the celebration's fake growth.
    pub fn height_readout(&self) -> f64 {
        self.height_readout_override.unwrap_or(self.measurements.height)
    }

    fn leaves_mut(&mut self, layer: LeafLayer) -> &mut [LeafAttrs] {
        match layer {
            LeafLayer::Foreground => &mut self.foreground,
            LeafLayer::Background => &mut self.background,
        }
    }
}
