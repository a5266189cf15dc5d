//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (animation timestamps to frame deltas)
//! - Input and output across the wasm boundary

pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use time::{FrameClock, sanitize_dt};
