//! Game state and core simulation types
//!
//! Everything a step reads or writes lives in `GameState`; the level layout
//! is separate and never mutated.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::camera::{CameraMode, CameraRig};
use super::pickup::PickupState;
use crate::level::Level;

/// The rolling ball
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Accumulated roll about x (radians, unbounded)
    pub anglex: f32,
    /// Accumulated roll applied about y (radians, unbounded)
    pub anglez: f32,
}

impl BallState {
    /// Model matrix: translate to position, then roll about x, then about y
    pub fn pose(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.anglex)
            * Mat4::from_rotation_y(self.anglez)
    }
}

/// Notable transitions raised during a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PickupCollected { id: String, score: i32 },
    GoalReached,
    /// Ball dropped below the level's fall floor
    BallLost,
    CameraSwitched(CameraMode),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: BallState,
    pub score: i32,
    /// Monotonic success flag
    pub goal: bool,
    /// Monotonic failure flag
    pub game_over: bool,
    /// Whether the ball was over a platform this step (debug readout)
    pub safe: bool,
    /// One entry per level pickup, same order
    pub pickups: Vec<PickupState>,
    pub camera: CameraRig,
    /// Steps taken so far
    pub frame: u64,
    /// Events raised by the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session on `level`: ball at rest at the origin, score zero
    pub fn new(level: &Level) -> Self {
        Self {
            ball: BallState::default(),
            score: 0,
            goal: false,
            game_over: false,
            safe: false,
            pickups: level.pickups.iter().map(PickupState::new).collect(),
            camera: CameraRig::new(level.initial_camera),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Goal reached or ball lost; the ball no longer integrates
    pub fn is_terminal(&self) -> bool {
        self.goal || self.game_over
    }
}
