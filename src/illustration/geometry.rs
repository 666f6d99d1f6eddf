//! Fixed shape collection of the agave drawing.
//!
//! Leaves fan out from a shared pivot at the base of the rosette. Index 0 is
//! the upright central leaf; higher indices alternate left/right and lean
//! further out, so showing "the first N leaves" grows the rosette from the
//! middle outward.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

pub const VIEW_BOX: &str = "0 0 500 500";
/// Transform origin for leaf scaling, in SVG user units.
pub const PIVOT: (f64, f64) = (250.0, 380.0);
pub const CORE_CENTER: (f64, f64) = (250.0, 372.0);
pub const STEM_TOP: (f64, f64) = (250.0, 380.0);
pub const STEM_BOTTOM: (f64, f64) = (250.0, 440.0);
pub const SOIL_CENTER: (f64, f64) = (250.0, 445.0);

pub const FOREGROUND_LEAF_COUNT: usize = 35;
pub const BACKGROUND_LEAF_COUNT: usize = 10;

pub const LEAF_PALETTE: [&str; 4] = ["#00848e", "#00999d", "#00a9ac", "#0ac1c5"];
pub const BACKGROUND_LEAF_FILL: &str = "#00737a";
pub const STEM_COLOR: &str = "#006d74";
pub const SOIL_COLOR: &str = "#8a5a44";
pub const CORE_FILL: &str = "#0a5f63";

const FOREGROUND_SPREAD_DEG: f64 = 84.0;
const BACKGROUND_SPREAD_DEG: f64 = 78.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LeafShape {
    pub angle_deg: f64,
    pub length: f64,
    pub path: String,
    pub tip: (f64, f64),
    pub base_fill: &'static str,
}

/// Lean of leaf `index` out of `count`, alternating sides from the center.
#[allow(clippy::cast_precision_loss)]
pub fn leaf_angle_deg(index: usize, count: usize, spread_deg: f64) -> f64 {
    if index == 0 || count < 2 {
        return 0.0;
    }
    let per_side = (count - 1).div_ceil(2) as f64;
    let rank = index.div_ceil(2) as f64;
    let side = if index % 2 == 1 { -1.0 } else { 1.0 };
    side * rank * (spread_deg / per_side)
}

/// One blade: two quadratic curves from the pivot to the tip and back.
pub fn leaf_shape(angle_deg: f64, length: f64, half_width: f64, base_fill: &'static str) -> LeafShape {
    let (dx, dy) = direction(angle_deg);
    let (nx, ny) = (-dy, dx);
    let (bx, by) = PIVOT;
    let tip = (bx + dx * length, by + dy * length);
    let mid = (bx + dx * length * 0.45, by + dy * length * 0.45);
    let c1 = (mid.0 + nx * half_width, mid.1 + ny * half_width);
    let c2 = (mid.0 - nx * half_width, mid.1 - ny * half_width);

    let path = format!(
        "M{bx:.1} {by:.1} Q{:.1} {:.1} {:.1} {:.1} Q{:.1} {:.1} {bx:.1} {by:.1} Z",
        c1.0, c1.1, tip.0, tip.1, c2.0, c2.1
    );
    LeafShape { angle_deg, length, path, tip, base_fill }
}

pub fn foreground_leaves() -> Vec<LeafShape> {
    (0..FOREGROUND_LEAF_COUNT)
        .map(|i| {
            let angle = leaf_angle_deg(i, FOREGROUND_LEAF_COUNT, FOREGROUND_SPREAD_DEG);
            let length = 220.0 - angle.abs() * 1.1;
            leaf_shape(angle, length, 14.0, LEAF_PALETTE[i % LEAF_PALETTE.len()])
        })
        .collect()
}

pub fn background_leaves() -> Vec<LeafShape> {
    (0..BACKGROUND_LEAF_COUNT)
        .map(|i| {
            let angle = leaf_angle_deg(i, BACKGROUND_LEAF_COUNT, BACKGROUND_SPREAD_DEG);
            let length = 180.0 - angle.abs() * 0.6;
            leaf_shape(angle, length, 20.0, BACKGROUND_LEAF_FILL)
        })
        .collect()
}

/// Short dark strokes continuing past each leaf tip.
pub fn tips_path(leaves: &[LeafShape]) -> String {
    let mut d = String::new();
    for leaf in leaves {
        let (dx, dy) = direction(leaf.angle_deg);
        let (tx, ty) = leaf.tip;
        push_segment(&mut d, (tx - dx * 4.0, ty - dy * 4.0), (tx + dx * 8.0, ty + dy * 8.0));
    }
    d
}

/// Small outward ticks along both leaf edges.
pub fn spines_path(leaves: &[LeafShape]) -> String {
    let mut d = String::new();
    for leaf in leaves {
        let (dx, dy) = direction(leaf.angle_deg);
        let (nx, ny) = (-dy, dx);
        for t in [0.35, 0.55, 0.75] {
            let along = leaf.length * t;
            // Blade half-width tapers toward the tip.
            let edge = 14.0 * (1.0 - t) * 0.9;
            for side in [-1.0, 1.0] {
                let base = (PIVOT.0 + dx * along + nx * edge * side, PIVOT.1 + dy * along + ny * edge * side);
                let spike = (base.0 + nx * 4.0 * side + dx * 2.0, base.1 + ny * 4.0 * side + dy * 2.0);
                push_segment(&mut d, base, spike);
            }
        }
    }
    d
}

/// Midrib lines drawn over the foreground leaves.
pub fn details_path(leaves: &[LeafShape]) -> String {
    let mut d = String::new();
    for leaf in leaves {
        let (dx, dy) = direction(leaf.angle_deg);
        let start = (PIVOT.0 + dx * leaf.length * 0.1, PIVOT.1 + dy * leaf.length * 0.1);
        let end = (PIVOT.0 + dx * leaf.length * 0.7, PIVOT.1 + dy * leaf.length * 0.7);
        push_segment(&mut d, start, end);
    }
    d
}

/// Unit vector pointing from the pivot toward a leaf leaning `angle_deg`
/// from vertical (positive leans right).
fn direction(angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (rad.sin(), -rad.cos())
}

fn push_segment(d: &mut String, from: (f64, f64), to: (f64, f64)) {
    if !d.is_empty() {
        d.push(' ');
    }
    d.push_str(&format!("M{:.1} {:.1} L{:.1} {:.1}", from.0, from.1, to.0, to.1));
}
