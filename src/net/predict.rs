//! Prediction request dispatch and response interpretation.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`, carrying the CSRF
//! header and same-origin credentials, raced against a timeout that aborts
//! the fetch through an `AbortController`.
//! Server-side (SSR): a stub that reports the call as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, non-JSON bodies, and timeouts all
//! become [`RequestError`]s; a JSON `success: false` becomes
//! [`RequestError::Rejected`] carrying the server's message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use super::types::{PredictResponse, Prediction};
use crate::config::ClientConfig;
use crate::error::{ClientError, DEFAULT_REJECTION_MESSAGE, RequestError};
use crate::state::measurements::Measurements;

/// True when a `Content-Type` header announces JSON.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

/// Turn a raw HTTP response into a prediction.
///
/// Checks run in the order the page reports them: status, content type,
/// body shape, then the `success` flag.
///
/// # Errors
///
/// Returns the matching [`RequestError`] for any failed check.
pub fn interpret_response(
    status: u16,
    status_text: &str,
    content_type: Option<&str>,
    body: &str,
) -> Result<Prediction, RequestError> {
    if !(200..300).contains(&status) {
        return Err(RequestError::Status { status, status_text: status_text.to_owned() });
    }
    if !is_json_content_type(content_type) {
        return Err(RequestError::NotJson);
    }

    let resp: PredictResponse = serde_json::from_str(body).map_err(|e| RequestError::Malformed(e.to_string()))?;
    if !resp.success {
        let message = resp
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned());
        return Err(RequestError::Rejected(message));
    }

    let predicted_years = resp
        .predicted_years
        .ok_or_else(|| RequestError::Malformed("falta el campo prediccion".to_owned()))?;
    let echoed = resp
        .echoed
        .ok_or_else(|| RequestError::Malformed("falta el campo datos".to_owned()))?;

    Ok(Prediction { predicted_years, echoed: echoed.into(), demo: resp.demo })
}

/// Post validated measurements to the prediction endpoint.
///
/// # Errors
///
/// [`ClientError::MissingCsrfToken`] when no anti-forgery token is available,
/// otherwise any [`RequestError`] produced by the exchange.
pub async fn submit_prediction(config: &ClientConfig, measurements: Measurements) -> Result<Prediction, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};
        use std::pin::pin;

        use super::types::MeasurementPayload;
        use crate::util::csrf::find_csrf_token;

        let token = find_csrf_token(&config.csrf_field, &config.csrf_cookie)?;
        let controller = web_sys::AbortController::new()
            .map_err(|_| RequestError::Transport("no se pudo crear el AbortController".to_owned()))?;
        let signal = controller.signal();

        let request = gloo_net::http::Request::post(&config.endpoint)
            .header(&config.csrf_header, &token)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .abort_signal(Some(&signal))
            .json(&MeasurementPayload::from(measurements))
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let send = pin!(request.send());
        let timeout = pin!(gloo_timers::future::TimeoutFuture::new(config.request_timeout_ms));
        let resp = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| {
                log::error!("predict request failed: {e}");
                RequestError::Transport(e.to_string())
            })?,
            Either::Right(((), _)) => {
                controller.abort();
                log::warn!("predict request aborted after {} ms", config.request_timeout_ms);
                return Err(RequestError::Timeout(config.request_timeout_ms).into());
            }
        };

        let status = resp.status();
        let status_text = resp.status_text();
        let content_type = resp.headers().get("content-type");
        log::debug!("predict response: {status} {status_text} ({})", content_type.as_deref().unwrap_or("-"));

        let body = resp.text().await.map_err(|e| RequestError::Transport(e.to_string()))?;
        interpret_response(status, &status_text, content_type.as_deref(), &body).map_err(ClientError::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, measurements);
        Err(RequestError::Transport("no disponible en el servidor".to_owned()).into())
    }
}
