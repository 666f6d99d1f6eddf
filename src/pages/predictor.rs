//! The single predictor page: form, illustration, and result area.

use leptos::prelude::*;

use crate::components::agave_illustration::AgaveIllustration;
use crate::components::measurement_field::MeasurementInput;
use crate::components::result_panel::ResultPanel;
use crate::config::ClientConfig;
use crate::illustration::player::TransitionPlayer;
use crate::illustration::scene::Scene;
use crate::illustration::timeline::{intro, refresh};
use crate::state::measurements::{MeasurementControls, MeasurementField};
use crate::state::prediction::PredictionState;

/// Predictor page.
///
/// Owns the control, scene, and prediction signals. Every usable edit
/// refreshes the illustration against the previously shown measurements;
/// a successful prediction plays the celebration.
#[component]
pub fn PredictorPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();

    let controls = RwSignal::new(MeasurementControls::new(&config));
    let initial = controls.with_untracked(MeasurementControls::display_measurements);
    let scene = RwSignal::new(Scene::new(initial));
    let player = TransitionPlayer::new(scene);
    let prediction = RwSignal::new(PredictionState::default());

    // Measurements the illustration last reflected; pulses compare against it.
    let shown = StoredValue::new(initial);

    let on_change = Callback::new(move |()| {
        let current = controls.with_untracked(MeasurementControls::display_measurements);
        let previous = shown.get_value();
        shown.set_value(current);
        if let Some(pulses) = scene.try_update(|s| refresh(s, &previous, &current)) {
            player.play_all(pulses);
        }
    });

    // Effects only run in the browser, so the intro never plays during SSR.
    Effect::new(move || {
        log::debug!("playing intro");
        player.play(intro());
    });

    let on_submit = move |_| {
        if !prediction.with_untracked(PredictionState::submit_enabled) {
            return;
        }
        let measurements = match controls.with_untracked(MeasurementControls::submit_values).validate() {
            Ok(measurements) => measurements,
            Err(err) => {
                log::info!("submission rejected locally: {err}");
                prediction.set(PredictionState::Failed(err.into()));
                return;
            }
        };
        prediction.set(PredictionState::Loading);

        #[cfg(feature = "hydrate")]
        {
            use crate::illustration::timeline::celebration;
            use crate::net::predict::submit_prediction;

            let config = config.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_prediction(&config, measurements).await;
                let succeeded = outcome.is_ok();
                prediction.set(PredictionState::from_outcome(outcome));
                if succeeded {
                    let height = scene.with_untracked(|s| s.measurements.height);
                    player.play(celebration(height));
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, measurements);
        }
    };

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"AgavePredictor ML"</h1>
                <p class="subtitle">"Estimación del tiempo de crecimiento del agave"</p>
            </header>
            <main class="predictor-layout">
                <section class="input-panel">
                    <h2>"Medidas de la planta"</h2>
                    {MeasurementField::ALL
                        .into_iter()
                        .map(|field| view! { <MeasurementInput field=field controls=controls on_change=on_change/> })
                        .collect::<Vec<_>>()}
                    <button
                        id="predict-btn"
                        class="btn btn-primary"
                        disabled=move || !prediction.with(PredictionState::submit_enabled)
                        on:click=on_submit
                    >
                        "Predecir crecimiento"
                    </button>
                </section>
                <section class="visual-panel">
                    <AgaveIllustration scene=scene/>
                </section>
                <section class="results-panel">
                    <h2>"Resultado"</h2>
                    <ResultPanel state=prediction/>
                </section>
            </main>
        </div>
    }
}
