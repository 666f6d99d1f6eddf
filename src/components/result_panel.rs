//! Result area: placeholder, spinner, prediction, or error.

use leptos::prelude::*;

use crate::state::prediction::PredictionState;
use crate::util::present::{ErrorView, SuccessView, present_error, present_success};

#[component]
pub fn ResultPanel(state: RwSignal<PredictionState>) -> impl IntoView {
    view! {
        <div class="results-container">
            {move || match state.get() {
                PredictionState::Idle => {
                    view! {
                        <div id="results-display" class="results-display">
                            <p class="placeholder">
                                "Ajusta las medidas de tu agave y pulsa \u{201c}Predecir\u{201d} para estimar su tiempo de crecimiento."
                            </p>
                        </div>
                    }
                        .into_any()
                }
                PredictionState::Loading => {
                    view! {
                        <div id="loading-indicator" class="loading-indicator">
                            <div class="spinner"></div>
                            <p>"Calculando predicción..."</p>
                        </div>
                    }
                        .into_any()
                }
                PredictionState::Succeeded(prediction) => success_view(present_success(&prediction)).into_any(),
                PredictionState::Failed(err) => error_view(present_error(&err)).into_any(),
            }}
        </div>
    }
}

/// The `fade-in` class runs its one-second animation each time this view mounts.
fn success_view(success: SuccessView) -> impl IntoView {
    view! {
        <div id="results-display" class="results-display fade-in">
            <p class="success-message">{success.heading}</p>
            <p>
                <strong>"Datos de entrada:"</strong>
            </p>
            <ul>{success.input_lines.into_iter().map(|line| view! { <li>{line}</li> }).collect::<Vec<_>>()}</ul>
            <p>
                <strong>"Tiempo de crecimiento estimado:"</strong>
            </p>
            <p class="prediction-value">{success.duration}</p>
            <p>
                <small>"Valor exacto: " {success.exact}</small>
            </p>
            <p>
                <small>{success.model_note}</small>
            </p>
            {success.demo_note.map(|note| view! { <p class="demo-note"><small>{note}</small></p> })}
        </div>
    }
}

fn error_view(error: ErrorView) -> impl IntoView {
    view! {
        <div id="results-display" class="results-display">
            <p class="error-message">{error.heading}</p>
            <p>{error.message}</p>
            {error.hint.map(|hint| view! { <p class="error-hint">{hint}</p> })}
        </div>
    }
}
