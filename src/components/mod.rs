//! Leptos views of the predictor page.
//!
//! DESIGN
//! ======
//! Components only read signals and forward user events. Parsing, mapping,
//! and formatting live in `state`, `illustration`, and `util`.

pub mod agave_illustration;
pub mod measurement_field;
pub mod result_panel;
