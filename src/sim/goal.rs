//! Goal detection
//!
//! The goal is a footprint on the final platform with a height floor and a
//! periodic gate: it only accepts the ball during the open part of each
//! cycle (the spinning ring faces the ball).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::zone::SafeZone;

/// Repeating open/closed window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGate {
    /// Cycle length in seconds
    pub period: f32,
    /// Open for `elapsed mod period < open`
    pub open: f32,
}

impl TimeGate {
    pub fn is_open(&self, elapsed: f32) -> bool {
        elapsed.rem_euclid(self.period) < self.open
    }
}

/// Terminal success region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalRegion {
    pub footprint: SafeZone,
    /// Ball must be strictly above this height
    pub min_height: f32,
    pub gate: TimeGate,
}

impl GoalRegion {
    /// Check if the ball reaches the goal at this instant.
    ///
    /// NaN positions fail the comparisons and never reach the goal.
    pub fn reached(&self, pos: Vec3, elapsed: f32) -> bool {
        pos.y > self.min_height
            && self.footprint.contains(pos.x, pos.z)
            && self.gate.is_open(elapsed)
    }
}
