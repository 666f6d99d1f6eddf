//! Client configuration: endpoint, request timeout, anti-forgery token
//! sources, and slider bounds.
//!
//! Defaults match the Django host page. The host may override the endpoint
//! and timeout through `data-endpoint` / `data-timeout-ms` attributes on
//! `<body>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PREDICT_ENDPOINT: &str = "/predict/";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const DEFAULT_CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// Range-slider bounds for one measurement field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Bounds plus the value a field starts with on page load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDefaults {
    pub bounds: SliderBounds,
    pub initial: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub request_timeout_ms: u32,
    pub csrf_field: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub height: FieldDefaults,
    pub diameter: FieldDefaults,
    pub leaf_count: FieldDefaults,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PREDICT_ENDPOINT.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            csrf_field: DEFAULT_CSRF_FIELD.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            height: FieldDefaults {
                bounds: SliderBounds { min: 10.0, max: 300.0, step: 0.1 },
                initial: 120.0,
            },
            diameter: FieldDefaults {
                bounds: SliderBounds { min: 10.0, max: 200.0, step: 0.1 },
                initial: 80.0,
            },
            leaf_count: FieldDefaults {
                bounds: SliderBounds { min: 1.0, max: 50.0, step: 1.0 },
                initial: 20.0,
            },
        }
    }
}

impl ClientConfig {
    /// Apply host-page overrides. Blank or unparsable values keep the current setting.
    #[must_use]
    pub fn with_overrides(mut self, endpoint: Option<&str>, timeout_ms: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.endpoint = endpoint.to_owned();
        }
        self.request_timeout_ms = parse_timeout_ms(timeout_ms, self.request_timeout_ms);
        self
    }

    /// Build the config from `<body data-endpoint=… data-timeout-ms=…>`.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let dataset = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.dataset());
        let Some(dataset) = dataset else {
            return Self::default();
        };
        let endpoint = dataset.get("endpoint");
        let timeout_ms = dataset.get("timeoutMs");
        Self::default().with_overrides(endpoint.as_deref(), timeout_ms.as_deref())
    }
}

fn parse_timeout_ms(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default)
}
