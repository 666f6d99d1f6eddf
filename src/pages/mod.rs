//! Page-level components.

pub mod predictor;
