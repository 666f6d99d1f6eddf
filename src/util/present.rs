//! Text formatting for the result area and the measurement readouts.

#[cfg(test)]
#[path = "present_test.rs"]
mod present_test;

use std::fmt;

use crate::error::{BACKEND_HINT, ClientError, ERROR_HEADING};
use crate::net::types::Prediction;

pub const SUCCESS_HEADING: &str = "✅ Predicción Completada";
pub const MODEL_NOTE: &str = "Predicción realizada con RandomForest (R² = 0.92)";
pub const DEMO_NOTE: &str = "Modo demostración: el servidor no encontró el modelo entrenado y usó una estimación aproximada.";

/// Predicted growth time split into whole years and remaining months.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthDuration {
    pub years: i64,
    pub months: i64,
}

impl fmt::Display for GrowthDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} años y {} meses", self.years, self.months)
    }
}

/// Months are `round(fraction × 12)`, so values just under a whole year
/// can read as "12 meses".
#[allow(clippy::cast_possible_truncation)]
pub fn split_years(value: f64) -> GrowthDuration {
    let whole = value.floor();
    let months = ((value - whole) * 12.0).round();
    GrowthDuration { years: whole as i64, months: months as i64 }
}

/// Places past the requested precision inspected to tell an exact tie from
/// a value that only prints like one.
const TIE_GUARD_DIGITS: usize = 64;

/// Fixed-point text that rounds exact ties away from zero.
///
/// `{:.N}` sends a tie such as `120.25` to the even neighbour (`120.2`); the
/// readouts show `120.3`. Non-ties round the same either way.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let precision = digits + TIE_GUARD_DIGITS;
    let exact = format!("{magnitude:.precision$}");
    let (head, tail) = exact.split_at(exact.len() - TIE_GUARD_DIGITS);
    let tie = tail.strip_prefix('5').is_some_and(|rest| rest.bytes().all(|b| b == b'0'));
    if !tie {
        return format!("{sign}{magnitude:.digits$}");
    }

    let mut bytes = head.trim_end_matches('.').as_bytes().to_vec();
    let mut carried = true;
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => {}
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carried = false;
                break;
            }
        }
    }
    let rounded: String = bytes.into_iter().map(char::from).collect();
    if carried { format!("{sign}1{rounded}") } else { format!("{sign}{rounded}") }
}

pub fn format_exact_years(value: f64) -> String {
    format!("{} años", to_fixed(value, 2))
}

pub fn format_height_readout(height: f64) -> String {
    format!("Altura: {} cm", to_fixed(height, 1))
}

pub fn format_diameter_readout(diameter: f64) -> String {
    format!("Diámetro: {} cm", to_fixed(diameter, 1))
}

pub fn format_leaves_readout(leaf_count: u64) -> String {
    format!("Hojas: {leaf_count}")
}

/// Everything the success variant of the result area shows.
#[derive(Clone, Debug, PartialEq)]
pub struct SuccessView {
    pub heading: &'static str,
    pub input_lines: Vec<String>,
    pub duration: String,
    pub exact: String,
    pub model_note: &'static str,
    pub demo_note: Option<&'static str>,
}

pub fn present_success(prediction: &Prediction) -> SuccessView {
    let echoed = prediction.echoed;
    SuccessView {
        heading: SUCCESS_HEADING,
        input_lines: vec![
            format!("Altura de la planta: {} cm", echoed.height),
            format!("Diámetro de la roseta: {} cm", echoed.diameter),
            format!("Número de hojas funcionales: {}", echoed.leaf_count),
        ],
        duration: split_years(prediction.predicted_years).to_string(),
        exact: format_exact_years(prediction.predicted_years),
        model_note: MODEL_NOTE,
        demo_note: prediction.demo.then_some(DEMO_NOTE),
    }
}

/// Everything the error variant of the result area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorView {
    pub heading: &'static str,
    pub message: String,
    pub hint: Option<&'static str>,
}

pub fn present_error(err: &ClientError) -> ErrorView {
    ErrorView {
        heading: ERROR_HEADING,
        message: err.user_message(),
        hint: err.shows_backend_hint().then_some(BACKEND_HINT),
    }
}
