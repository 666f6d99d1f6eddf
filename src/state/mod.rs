//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `measurements` holds the three paired controls and the rules for turning
//! them into numbers; `prediction` tracks the lifecycle of one submission.
//! Both are plain structs wrapped in `RwSignal`s by the page.

pub mod measurements;
pub mod prediction;
