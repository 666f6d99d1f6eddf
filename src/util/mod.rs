//! Utility helpers shared across the page, components, and illustration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, hidden
//! form fields) and text/number formatting from component logic so the rules
//! stay testable without a DOM.

pub mod color;
pub mod csrf;
pub mod input_sync;
pub mod present;
