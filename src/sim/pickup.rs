//! Bonus pickups and their scoring rules
//!
//! Each pickup is collected at most once. Rules run in declaration order so
//! a later rule sees the score written by an earlier one in the same frame.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Upward speed of a collected pickup floating away (units/s)
pub const PICKUP_RISE_SPEED: f32 = 12.0;

/// How a pickup's position changes with elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PickupMotion {
    /// Sits at its anchor
    Static,
    /// Vertical oscillation: `y = anchor.y + base + amplitude * sin(ω t mod 2π)`
    Bob {
        base: f32,
        amplitude: f32,
        angular_freq: f32,
    },
}

impl PickupMotion {
    pub fn offset_at(&self, elapsed: f32) -> Vec3 {
        match *self {
            PickupMotion::Static => Vec3::ZERO,
            PickupMotion::Bob {
                base,
                amplitude,
                angular_freq,
            } => {
                let phase = (angular_freq * elapsed) % std::f32::consts::TAU;
                Vec3::new(0.0, base + amplitude * phase.sin(), 0.0)
            }
        }
    }
}

/// Distance used for the capture test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Full 3D distance
    #[default]
    Spatial,
    /// Horizontal (x, z) distance only
    Planar,
}

impl DistanceMetric {
    pub fn distance(&self, a: Vec3, b: Vec3) -> f32 {
        match self {
            DistanceMetric::Spatial => a.distance(b),
            DistanceMetric::Planar => Vec2::new(a.x, a.z).distance(Vec2::new(b.x, b.z)),
        }
    }
}

/// Two-channel colour pulse shared by scoring and the pickup tint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    pub red: f32,
    pub green: f32,
}

impl Pulse {
    /// Sample the pulse: red and green run half a cycle apart
    pub fn sample(angular_freq: f32, elapsed: f32) -> Self {
        use std::f32::consts::PI;
        let phase = angular_freq * elapsed;
        Self {
            red: 0.5 + 0.5 * phase.sin(),
            green: 0.5 + 0.5 * (phase - PI).sin(),
        }
    }
}

/// Score adjustment applied on the collection edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreRule {
    /// Score becomes -1 while the pulse is red-dominant, +1 otherwise
    PulseSign { angular_freq: f32 },
    /// Score is looked up in `table`; unmatched scores are kept
    Remap { table: Vec<(i32, i32)> },
}

impl ScoreRule {
    pub fn apply(&self, score: i32, elapsed: f32) -> i32 {
        match self {
            ScoreRule::PulseSign { angular_freq } => {
                let pulse = Pulse::sample(*angular_freq, elapsed);
                if pulse.red > pulse.green { -1 } else { 1 }
            }
            ScoreRule::Remap { table } => table
                .iter()
                .find(|(from, _)| *from == score)
                .map(|&(_, to)| to)
                .unwrap_or(score),
        }
    }
}

/// Static description of a pickup, part of the level data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupDef {
    pub id: String,
    pub anchor: Vec3,
    #[serde(default = "default_motion")]
    pub motion: PickupMotion,
    #[serde(default)]
    pub metric: DistanceMetric,
    /// Capture radius
    pub radius: f32,
    pub rule: ScoreRule,
    /// Height above which a collected pickup is no longer drawn
    #[serde(default = "default_vanish_height")]
    pub vanish_height: f32,
}

fn default_motion() -> PickupMotion {
    PickupMotion::Static
}

fn default_vanish_height() -> f32 {
    8.0
}

impl PickupDef {
    /// Position at the given elapsed time, ignoring collection
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        self.anchor + self.motion.offset_at(elapsed)
    }

    /// Check if the ball is within capture range.
    ///
    /// A NaN on either side yields a NaN distance, which never captures.
    pub fn captures(&self, ball: Vec3, elapsed: f32) -> bool {
        self.metric.distance(ball, self.position_at(elapsed)) <= self.radius
    }
}

/// Runtime state of one pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupState {
    /// Monotonic: never returns to false
    pub collected: bool,
    /// Where the pickup is drawn this frame
    pub position: Vec3,
}

impl PickupState {
    pub fn new(def: &PickupDef) -> Self {
        Self {
            collected: false,
            position: def.position_at(0.0),
        }
    }

    /// Visible until a collected pickup has floated above its vanish height
    pub fn is_visible(&self, def: &PickupDef) -> bool {
        !self.collected || self.position.y <= def.vanish_height
    }

    /// Advance the presentation position for this frame
    pub fn animate(&mut self, def: &PickupDef, elapsed: f32, dt: f32) {
        if !self.collected {
            self.position = def.position_at(elapsed);
        } else if self.position.y <= def.vanish_height {
            self.position.y += PICKUP_RISE_SPEED * dt;
        }
    }
}

/// Test every uncollected pickup against the ball, in declaration order.
///
/// Collected pickups freeze at the position they were caught. Returns the
/// indices collected during this call.
pub fn collect_pickups(
    defs: &[PickupDef],
    states: &mut [PickupState],
    ball: Vec3,
    elapsed: f32,
    score: &mut i32,
) -> Vec<usize> {
    let mut collected = Vec::new();
    for (index, (def, state)) in defs.iter().zip(states.iter_mut()).enumerate() {
        if state.collected || !def.captures(ball, elapsed) {
            continue;
        }
        state.collected = true;
        state.position = def.position_at(elapsed);
        *score = def.rule.apply(*score, elapsed);
        collected.push(index);
    }
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sun() -> PickupDef {
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
        }
    }

    fn bobber() -> PickupDef {
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
        }
    }

    #[test]
    fn test_pulse_sign_red_phase() {
        // sin(0.4π * 1.25) = sin(π/2) = 1: red dominant
        let rule = ScoreRule::PulseSign {
            angular_freq: 0.4 * PI,
        };
        assert_eq!(rule.apply(0, 1.25), -1);
        // sin(0.4π * 3.75) = sin(1.5π) = -1: green dominant
        assert_eq!(rule.apply(0, 3.75), 1);
    }

    #[test]
    fn test_remap_table() {
        let rule = bobber().rule;
        assert_eq!(rule.apply(1, 0.0), 2);
        assert_eq!(rule.apply(0, 0.0), 1);
        assert_eq!(rule.apply(-1, 0.0), 0);
        // Not in the table
        assert_eq!(rule.apply(2, 0.0), 2);
    }

    #[test]
    fn test_bob_motion() {
        let def = bobber();
        assert!((def.position_at(0.0).y - 2.5).abs() < 1e-5);
        // Quarter period of ω = 0.4π is 1.25 s
        assert!((def.position_at(1.25).y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_planar_ignores_height() {
        let def = sun();
        assert!(def.captures(Vec3::new(0.0, 30.0, 13.0), 0.0));
        assert!(!def.captures(Vec3::new(0.0, 0.0, 11.5), 0.0));
    }

    #[test]
    fn test_spatial_uses_height() {
        let def = bobber();
        let at_rest = def.position_at(0.0);
        assert!(def.captures(at_rest, 0.0));
        assert!(!def.captures(at_rest - Vec3::Y * 2.0, 0.0));
    }

    #[test]
    fn test_collect_once() {
        let defs = vec![sun()];
        let mut states: Vec<_> = defs.iter().map(PickupState::new).collect();
        let mut score = 0;

        let first = collect_pickups(
            &defs,
            &mut states,
            Vec3::new(0.0, 0.0, 14.0),
            3.75,
            &mut score,
        );
        assert_eq!(first, vec![0]);
        assert_eq!(score, 1);

        // Red-dominant time would give -1 if the rule ran again
        let again = collect_pickups(
            &defs,
            &mut states,
            Vec3::new(0.0, 0.0, 14.0),
            1.25,
            &mut score,
        );
        assert!(again.is_empty());
        assert_eq!(score, 1);
    }

    #[test]
    fn test_declaration_order_composes() {
        let mut defs = vec![sun(), bobber()];
        // At t = 3.75 the bobber sits at its anchor; move it onto the sun
        defs[1].anchor = Vec3::new(0.0, 0.0, 14.0);
        let mut states: Vec<_> = defs.iter().map(PickupState::new).collect();
        let mut score = 0;

        let hit = collect_pickups(
            &defs,
            &mut states,
            Vec3::new(0.0, 0.0, 14.0),
            3.75,
            &mut score,
        );
        assert_eq!(hit, vec![0, 1]);
        // Green-dominant pulse scores +1, then the remap lifts it to +2
        assert_eq!(score, 2);
    }

    #[test]
    fn test_nan_ball_never_collects() {
        let defs = vec![sun()];
        let mut states: Vec<_> = defs.iter().map(PickupState::new).collect();
        let mut score = 0;
        let hit = collect_pickups(&defs, &mut states, Vec3::NAN, 0.0, &mut score);
        assert!(hit.is_empty());
        assert!(!states[0].collected);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_float_away_then_hidden() {
        let def = sun();
        let mut state = PickupState::new(&def);
        state.collected = true;
        assert!(state.is_visible(&def));

        for _ in 0..120 {
            state.animate(&def, 0.0, 1.0 / 60.0);
        }
        assert!(state.position.y > def.vanish_height);
        assert!(!state.is_visible(&def));

        // Stops rising once hidden
        let y = state.position.y;
        state.animate(&def, 0.0, 1.0 / 60.0);
        assert_eq!(state.position.y, y);
    }

    #[test]
    fn test_uncollected_follows_motion() {
        let def = bobber();
        let mut state = PickupState::new(&def);
        state.animate(&def, 1.25, 1.0 / 60.0);
        assert!((state.position.y - 5.0).abs() < 1e-4);
    }
}
