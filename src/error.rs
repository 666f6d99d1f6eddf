//! Error taxonomy for a prediction submission.
//!
//! ERROR HANDLING
//! ==============
//! Every error is terminal for the submission that produced it and ends up in
//! the result area as text. Nothing here is allowed to escape the UI boundary.
//! `ClientError` aggregates the two families so dispatch code can use `?`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Heading shown above every error message.
pub const ERROR_HEADING: &str = "❌ Error";

/// Appended to transport-level failures.
pub const BACKEND_HINT: &str =
    "Nota: Es posible que el modelo de ML no esté disponible. Verifica que los archivos del modelo estén en la carpeta /model.";

/// Fallback when the server reports `success: false` without a message.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Error al realizar la predicción";

/// Client-side input problems detected before any request is sent.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Todos los campos son requeridos y deben ser numéricos.")]
    NotNumeric,
    #[error("Todos los valores deben ser positivos.")]
    NotPositive,
}

/// Failures of the prediction exchange itself.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("{0}")]
    Transport(String),
    #[error("Error en la petición: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("La respuesta del servidor no es JSON válido")]
    NotJson,
    #[error("Respuesta del servidor incompleta: {0}")]
    Malformed(String),
    #[error("La petición no respondió en {0} ms")]
    Timeout(u32),
    /// The server answered `success: false`; the message is shown verbatim.
    #[error("{0}")]
    Rejected(String),
}

impl RequestError {
    pub fn shows_backend_hint(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("No se encontró el token CSRF. Recarga la página e inténtalo de nuevo.")]
    MissingCsrfToken,
}

impl ClientError {
    /// Text rendered under [`ERROR_HEADING`].
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(err) if err.shows_backend_hint() => {
                format!("Error al procesar la predicción: {err}")
            }
            other => other.to_string(),
        }
    }

    pub fn shows_backend_hint(&self) -> bool {
        matches!(self, Self::Request(err) if err.shows_backend_hint())
    }
}
