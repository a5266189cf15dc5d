//! Balance Ball - steer a rolling ball along a branching sky course
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, platforms, pickups, goal, camera)
//! - `level`: Course layout data
//! - `session`: Host-facing frame loop and render snapshots
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod level;
pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use level::{Level, LevelError};
pub use session::{FrameSnapshot, Session};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed timestep for headless runs (60 Hz, one step per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Roll angle gained per unit of travel is 1/ROLL_DIVISOR radians
    pub const ROLL_DIVISOR: f32 = std::f32::consts::PI;
}
