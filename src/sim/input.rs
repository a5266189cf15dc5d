//! Latched input commands
//!
//! Host key handlers only ever set flags. The frame loop takes the whole
//! latch once per step, which clears it, so a press is consumed by exactly
//! one step whether or not the key is still held.

use serde::{Deserialize, Serialize};

use super::camera::CameraMode;

/// Steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Back,
}

impl Direction {
    /// Default key bindings (j/l/i/k, arrows)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "j" | "J" | "ArrowLeft" => Some(Direction::Left),
            "l" | "L" | "ArrowRight" => Some(Direction::Right),
            "i" | "I" | "ArrowUp" => Some(Direction::Forward),
            "k" | "K" | "ArrowDown" => Some(Direction::Back),
            _ => None,
        }
    }
}

/// Commands collected between two steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLatch {
    pub left: bool,
    pub right: bool,
    /// Toward negative z
    pub forward: bool,
    /// Toward positive z
    pub back: bool,
    /// Pending view switch
    pub camera: Option<CameraMode>,
}

impl InputLatch {
    /// Latch a steering intent
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
            Direction::Forward => self.forward = true,
            Direction::Back => self.back = true,
        }
    }

    /// Latch a view switch; the last command before the step wins
    pub fn switch_camera(&mut self, mode: CameraMode) {
        self.camera = Some(mode);
    }

    /// Consume every latched command, leaving the latch cleared
    pub fn take(&mut self) -> InputLatch {
        std::mem::take(self)
    }

    pub fn is_idle(&self) -> bool {
        *self == InputLatch::default()
    }
}
