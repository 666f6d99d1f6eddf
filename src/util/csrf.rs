//! Anti-forgery token lookup.
//!
//! The Django host embeds the token as a hidden `csrfmiddlewaretoken` field
//! and also sets a `csrftoken` cookie. The field wins; the cookie is the
//! fallback. When neither yields a non-empty token the submission fails with
//! [`ClientError::MissingCsrfToken`] instead of posting an empty header.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use crate::error::ClientError;

/// Extract `name` from a `document.cookie` style string.
pub fn token_from_cookie_header(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

/// Pick the token by source precedence; blank values count as missing.
///
/// # Errors
///
/// Returns [`ClientError::MissingCsrfToken`] when no source has a token.
pub fn resolve_token(field: Option<String>, cookie: Option<String>) -> Result<String, ClientError> {
    field
        .into_iter()
        .chain(cookie)
        .map(|token| token.trim().to_owned())
        .find(|token| !token.is_empty())
        .ok_or(ClientError::MissingCsrfToken)
}

/// Look the token up in the live document.
///
/// # Errors
///
/// Returns [`ClientError::MissingCsrfToken`] when neither the hidden field nor
/// the cookie carries a token.
#[cfg(feature = "hydrate")]
pub fn find_csrf_token(field_name: &str, cookie_name: &str) -> Result<String, ClientError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window().and_then(|w| w.document());
    let Some(document) = document else {
        return Err(ClientError::MissingCsrfToken);
    };

    let selector = format!("input[name=\"{field_name}\"]");
    let field = match document.query_selector(&selector) {
        Ok(Some(el)) => el.dyn_into::<web_sys::HtmlInputElement>().map(|input| input.value()).ok(),
        _ => None,
    };

    let cookie = document
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
        .and_then(|html| html.cookie().ok())
        .and_then(|cookies| token_from_cookie_header(&cookies, cookie_name));

    let token = resolve_token(field, cookie);
    if token.is_err() {
        log::warn!("no CSRF token in #{field_name} field or {cookie_name} cookie");
    }
    token
}
