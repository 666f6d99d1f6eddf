//! Decorative agave illustration.
//!
//! DESIGN
//! ======
//! - `geometry`: the fixed shape collection (leaf paths, spines, tips, core).
//! - `scene`: presentation attributes of every shape plus the steady-state
//!   mapping from measurements to those attributes.
//! - `timeline`: timed effects expressed as cue lists on named channels
//!   (change pulses, celebration, intro).
//! - `player`: schedules timelines against the scene signal; starting a
//!   timeline cancels whatever was still pending on its channel.
//!
//! Everything except the browser timers behind `player` is pure and unit
//! tested.

pub mod geometry;
pub mod player;
pub mod scene;
pub mod timeline;
