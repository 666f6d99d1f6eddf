//! SVG agave bound to the shared [`Scene`] signal.

use leptos::prelude::*;

use crate::illustration::geometry::{
    self, CORE_CENTER, CORE_FILL, SOIL_CENTER, SOIL_COLOR, STEM_BOTTOM, STEM_COLOR, STEM_TOP, VIEW_BOX,
};
use crate::illustration::scene::{LeafAttrs, LeafLayer, Scene};
use crate::util::present::{format_diameter_readout, format_height_readout, format_leaves_readout};

/// Reactive attributes of one leaf, or defaults if the index is out of range.
fn leaf_attr<T: Default>(scene: RwSignal<Scene>, layer: LeafLayer, index: usize, f: impl Fn(&LeafAttrs) -> T) -> T {
    scene.with(|s| {
        let leaves = match layer {
            LeafLayer::Foreground => &s.foreground,
            LeafLayer::Background => &s.background,
        };
        leaves.get(index).map(f).unwrap_or_default()
    })
}

fn leaf_views(scene: RwSignal<Scene>, layer: LeafLayer, shapes: Vec<geometry::LeafShape>) -> Vec<impl IntoView> {
    shapes
        .into_iter()
        .enumerate()
        .map(move |(i, shape)| {
            view! {
                <path
                    d=shape.path
                    fill=move || leaf_attr(scene, layer, i, |l| l.fill.clone())
                    style=move || leaf_attr(scene, layer, i, LeafAttrs::style)
                ></path>
            }
        })
        .collect()
}

/// The illustration plus its three measurement readouts.
#[component]
pub fn AgaveIllustration(scene: RwSignal<Scene>) -> impl IntoView {
    let foreground = geometry::foreground_leaves();
    let spines = geometry::spines_path(&foreground);
    let tips = geometry::tips_path(&foreground);
    let details = geometry::details_path(&foreground);

    let container_class = move || {
        if scene.with(|s| s.growing) { "agave-container growing-agave" } else { "agave-container" }
    };
    let core_stem_style = move || format!("opacity: {};", scene.with(|s| s.core_stem_opacity));

    view! {
        <div id="agave-container" class=container_class>
            <svg id="agave-svg" viewBox=VIEW_BOX style=move || scene.with(|s| s.svg.style())>
                <ellipse
                    id="soil"
                    cx=SOIL_CENTER.0.to_string()
                    cy=SOIL_CENTER.1.to_string()
                    rx="150"
                    ry="22"
                    fill=SOIL_COLOR
                ></ellipse>
                <line
                    id="stem"
                    x1=STEM_TOP.0.to_string()
                    y1=STEM_TOP.1.to_string()
                    x2=STEM_BOTTOM.0.to_string()
                    y2=STEM_BOTTOM.1.to_string()
                    stroke=STEM_COLOR
                    stroke-linecap="round"
                    stroke-width=move || scene.with(|s| s.stem_width.to_string())
                    style=core_stem_style
                ></line>
                <g id="background-leaves">
                    {leaf_views(scene, LeafLayer::Background, geometry::background_leaves())}
                </g>
                <g id="leaves">{leaf_views(scene, LeafLayer::Foreground, foreground)}</g>
                <path
                    id="details"
                    d=details
                    fill="none"
                    stroke="#ffffff"
                    stroke-opacity="0.35"
                    stroke-width="1"
                    style=move || format!("opacity: {};", scene.with(|s| s.details_opacity))
                ></path>
                <path
                    id="spines"
                    d=spines
                    fill="none"
                    stroke=move || scene.with(|s| s.spines.stroke)
                    stroke-width=move || scene.with(|s| s.spines.width.to_string())
                    style=move || format!("opacity: {};", scene.with(|s| s.spines.opacity))
                ></path>
                <path
                    id="tips"
                    d=tips
                    fill="none"
                    stroke-linecap="round"
                    stroke=move || scene.with(|s| s.tips.stroke)
                    stroke-width=move || scene.with(|s| s.tips.width.to_string())
                    style=move || format!("opacity: {};", scene.with(|s| s.tips.opacity))
                ></path>
                <ellipse
                    id="core"
                    cx=CORE_CENTER.0.to_string()
                    cy=CORE_CENTER.1.to_string()
                    rx=move || scene.with(|s| s.core_radii.0.to_string())
                    ry=move || scene.with(|s| s.core_radii.1.to_string())
                    fill=CORE_FILL
                    style=core_stem_style
                ></ellipse>
            </svg>
        </div>
        <div class="agave-info">
            <p id="height-info">{move || format_height_readout(scene.with(Scene::height_readout))}</p>
            <p id="diameter-info">{move || format_diameter_readout(scene.with(|s| s.measurements.diameter))}</p>
            <p id="leaves-info">{move || format_leaves_readout(scene.with(|s| s.measurements.leaf_count))}</p>
        </div>
    }
}
