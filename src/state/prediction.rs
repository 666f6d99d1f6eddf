#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use crate::error::ClientError;
use crate::net::types::Prediction;

/// Lifecycle of the most recent submission.
///
/// The result area renders exactly one of these; success and error views
/// are mutually exclusive and both replace whatever was there before.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PredictionState {
    #[default]
    Idle,
    Loading,
    Succeeded(Prediction),
    Failed(ClientError),
}

impl PredictionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The submit button is disabled while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// Fold a finished request into the next state.
    pub fn from_outcome(outcome: Result<Prediction, ClientError>) -> Self {
        match outcome {
            Ok(prediction) => Self::Succeeded(prediction),
            Err(err) => Self::Failed(err),
        }
    }
}
