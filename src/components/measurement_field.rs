//! Paired numeric entry and range slider for one measurement.

use leptos::prelude::*;

use crate::state::measurements::{MeasurementControls, MeasurementField};
use crate::util::input_sync::{SyncOutcome, apply_entry_input, apply_slider_input};

/// One labeled measurement with its entry and slider kept in sync.
///
/// `on_change` fires only when the event produced a usable number, so the
/// illustration never refreshes on half-typed input.
#[component]
pub fn MeasurementInput(
    field: MeasurementField,
    controls: RwSignal<MeasurementControls>,
    on_change: Callback<()>,
) -> impl IntoView {
    let id = field.dom_id();
    let bounds = controls.with_untracked(|c| c.field(field).bounds);

    let entry = move || controls.with(|c| c.field(field).entry.clone());
    let slider = move || controls.with(|c| c.field(field).slider.to_string());

    let on_entry = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        if controls.try_update(|c| apply_entry_input(c.field_mut(field), &raw)) == Some(SyncOutcome::Refresh) {
            on_change.run(());
        }
    };

    let on_slider = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        if controls.try_update(|c| apply_slider_input(c.field_mut(field), &raw)) == Some(SyncOutcome::Refresh) {
            on_change.run(());
        }
    };

    view! {
        <div class="form-group">
            <label for=id>{field.label()}</label>
            <div class="input-with-slider">
                <input
                    type="number"
                    id=id
                    class="form-control"
                    min=bounds.min.to_string()
                    max=bounds.max.to_string()
                    step=bounds.step.to_string()
                    prop:value=entry
                    on:input=on_entry
                />
                <input
                    type="range"
                    id=format!("{id}-slider")
                    class="form-range"
                    min=bounds.min.to_string()
                    max=bounds.max.to_string()
                    step=bounds.step.to_string()
                    prop:value=slider
                    on:input=on_slider
                />
            </div>
        </div>
    }
}
