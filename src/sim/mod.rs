//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in from the caller only
//! - No randomness
//! - Stable iteration order (declaration order of the level)
//! - No rendering or platform dependencies

pub mod camera;
pub mod goal;
pub mod input;
pub mod pickup;
pub mod state;
pub mod tick;
pub mod zone;

pub use camera::{CameraMode, CameraRig, LookAt};
pub use goal::{GoalRegion, TimeGate};
pub use input::{Direction, InputLatch};
pub use pickup::{DistanceMetric, PickupDef, PickupMotion, PickupState, Pulse, ScoreRule};
pub use state::{BallState, GameEvent, GameState};
pub use tick::{FrameTime, integrate_ball, step, steer_axis, tick};
pub use zone::{SafeZone, is_safe};
