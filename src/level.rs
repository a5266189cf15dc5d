//! Level layout data
//!
//! A level is the static half of a session: platform footprints, pickups,
//! the goal and where the camera starts. `Level::reference()` is the
//! branching course the game ships with; other layouts load from JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sim::camera::LookAt;
use crate::sim::goal::{GoalRegion, TimeGate};
use crate::sim::pickup::{DistanceMetric, PickupDef, PickupMotion, ScoreRule};
use crate::sim::zone::SafeZone;

/// Depth of the black hole under the course
pub const REFERENCE_FALL_FLOOR: f32 = -80.0;

#[derive(Debug)]
pub enum LevelError {
    Parse(String),
    Serialize(String),
    /// Zone at this index has unordered or non-finite bounds
    BadZone(usize),
    /// Goal footprint has unordered or non-finite bounds
    BadGoal,
    /// Goal gate period is not positive
    BadGate(f32),
    /// Pickup with this id has a non-positive capture radius
    BadPickupRadius(String),
    DuplicatePickup(String),
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "level parse error: {e}"),
            Self::Serialize(e) => write!(f, "level serialize error: {e}"),
            Self::BadZone(i) => write!(f, "safe zone {i} has invalid bounds"),
            Self::BadGoal => write!(f, "goal footprint has invalid bounds"),
            Self::BadGate(p) => write!(f, "goal gate period must be positive, got {p}"),
            Self::BadPickupRadius(id) => {
                write!(f, "pickup '{id}' must have a positive capture radius")
            }
            Self::DuplicatePickup(id) => write!(f, "duplicate pickup id '{id}'"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Static layout of one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub zones: Vec<SafeZone>,
    /// Evaluated in this order every frame
    #[serde(default)]
    pub pickups: Vec<PickupDef>,
    pub goal: GoalRegion,
    /// Below this height the ball is lost
    #[serde(default = "default_fall_floor")]
    pub fall_floor: f32,
    #[serde(default = "default_initial_camera")]
    pub initial_camera: LookAt,
}

fn default_fall_floor() -> f32 {
    REFERENCE_FALL_FLOOR
}

fn default_initial_camera() -> LookAt {
    LookAt::new(Vec3::new(0.0, 10.0, 20.0), Vec3::ZERO, Vec3::Y)
}

impl Level {
    /// The branching course: a start strip toward +z, a dog-leg right, a
    /// long run toward -z, then two routes that meet at the goal.
    pub fn reference() -> Self {
        use std::f32::consts::PI;

        Self {
            zones: vec![
                // Start strip
                SafeZone::new(-2.0, 2.0, -3.8, 17.0),
                // Dog-leg
                SafeZone::new(-2.0, 12.0, 13.0, 16.0),
                // Long run
                SafeZone::new(8.0, 11.0, -47.0, 13.0),
                // Far crossing
                SafeZone::new(8.0, 42.5, -47.0, -44.0),
                // Goal approach
                SafeZone::new(44.0, 48.0, -43.0, -24.0),
                // Near crossing
                SafeZone::new(8.0, 48.0, -28.0, -24.0),
            ],
            pickups: vec![
                PickupDef {
                    id: "sun".into(),
                    anchor: Vec3::new(0.0, 0.0, 14.0),
                    motion: PickupMotion::Static,
                    metric: DistanceMetric::Planar,
                    radius: 2.0,
                    rule: ScoreRule::PulseSign {
                        angular_freq: 0.4 * PI,
                    },
                    vanish_height: 8.0,
                },
                PickupDef {
                    id: "bobber".into(),
                    anchor: Vec3::new(5.0, 0.0, 14.0),
                    motion: PickupMotion::Bob {
                        base: 2.5,
                        amplitude: 2.5,
                        angular_freq: 0.4 * PI,
                    },
                    metric: DistanceMetric::Spatial,
                    radius: 1.9,
                    rule: ScoreRule::Remap {
                        table: vec![(1, 2), (0, 1), (-1, 0)],
                    },
                    vanish_height: 8.0,
                },
            ],
            goal: GoalRegion {
                footprint: SafeZone::new(44.0, 48.0, -47.0, -45.0),
                min_height: -1.5,
                gate: TimeGate {
                    period: 2.0,
                    open: 1.5,
                },
            },
            fall_floor: REFERENCE_FALL_FLOOR,
            initial_camera: default_initial_camera(),
        }
    }

    /// Parse and validate a level
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level =
            serde_json::from_str(json).map_err(|e| LevelError::Parse(e.to_string()))?;
        level.validate()?;
        log::info!(
            "Loaded level: {} zones, {} pickups",
            level.zones.len(),
            level.pickups.len()
        );
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        serde_json::to_string_pretty(self).map_err(|e| LevelError::Serialize(e.to_string()))
    }

    /// Reject layouts the simulation cannot evaluate meaningfully
    pub fn validate(&self) -> Result<(), LevelError> {
        if let Some(i) = self.zones.iter().position(|z| !z.is_well_formed()) {
            return Err(LevelError::BadZone(i));
        }
        if !self.goal.footprint.is_well_formed() {
            return Err(LevelError::BadGoal);
        }
        let period = self.goal.gate.period;
        if !period.is_finite() || period <= 0.0 {
            return Err(LevelError::BadGate(period));
        }
        for (i, pickup) in self.pickups.iter().enumerate() {
            if pickup.radius.is_nan() || pickup.radius <= 0.0 {
                return Err(LevelError::BadPickupRadius(pickup.id.clone()));
            }
            if self.pickups[..i].iter().any(|p| p.id == pickup.id) {
                return Err(LevelError::DuplicatePickup(pickup.id.clone()));
            }
        }
        Ok(())
    }

    /// Index of a pickup by id
    pub fn pickup_index(&self, id: &str) -> Option<usize> {
        self.pickups.iter().position(|p| p.id == id)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::reference()
    }
}
