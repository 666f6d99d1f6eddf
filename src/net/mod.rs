//! Networking for the single prediction exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema of `POST /predict/`; `predict` builds the
//! request, races it against the timeout, and turns the response into a
//! [`types::Prediction`] or a [`crate::error::ClientError`].

pub mod predict;
pub mod types;
