//! Physics and camera tuning
//!
//! Data-driven game balance. Defaults reproduce the reference feel; hosts
//! may load overrides from JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum TuningError {
    Parse(String),
    Serialize(String),
    /// Named field is non-finite or out of range
    BadValue(&'static str, f32),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "tuning parse error: {e}"),
            Self::Serialize(e) => write!(f, "tuning serialize error: {e}"),
            Self::BadValue(field, v) => write!(f, "tuning field '{field}' out of range: {v}"),
        }
    }
}

impl std::error::Error for TuningError {}

/// Tunable constants consulted by the simulation and the host loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Steering ===
    /// Acceleration while a directional intent is held (units/s²)
    pub steer_accel: f32,
    /// Deceleration toward rest when no intent is held (units/s²)
    pub steer_decel: f32,

    // === Falling ===
    /// Gravitational constant
    pub gravity: f32,
    /// Multiplier applied to gravity while off the platforms
    pub gravity_scale: f32,
    /// Lowest vertical velocity reachable by falling (negative)
    pub terminal_velocity: f32,

    // === Camera ===
    /// Per-frame interpolation factor toward the active view (0-1)
    pub camera_blend: f32,

    // === Host ===
    /// Largest frame delta the host passes to the simulation (seconds)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            steer_accel: 100.0,
            steer_decel: 10.0,

            gravity: 9.8,
            gravity_scale: 10.0,
            terminal_velocity: -50.0,

            camera_blend: 0.1,

            max_frame_dt: 0.1,
        }
    }
}

impl Tuning {
    /// Vertical acceleration applied while the ball is unsupported
    #[inline]
    pub fn fall_accel(&self) -> f32 {
        self.gravity_scale * self.gravity
    }

    /// Camera blend factor restricted to [0, 1]
    pub fn effective_camera_blend(&self) -> f32 {
        if self.camera_blend.is_finite() {
            self.camera_blend.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Parse and validate tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        serde_json::to_string_pretty(self).map_err(|e| TuningError::Serialize(e.to_string()))
    }

    /// Reject values that would run steering or the frame clock backwards
    pub fn validate(&self) -> Result<(), TuningError> {
        let non_negative = [
            ("steer_accel", self.steer_accel),
            ("steer_decel", self.steer_decel),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::BadValue(field, value));
            }
        }
        for (field, value) in [
            ("gravity", self.gravity),
            ("gravity_scale", self.gravity_scale),
            ("terminal_velocity", self.terminal_velocity),
        ] {
            if !value.is_finite() {
                return Err(TuningError::BadValue(field, value));
            }
        }
        Ok(())
    }
}
