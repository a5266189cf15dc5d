//! Play session: the host-facing wrapper around the simulation
//!
//! Owns the level, tuning, game state and input latch. Hosts push input
//! edges in between frames and call `frame` once per animation frame; the
//! returned snapshot is everything a renderer needs.

use glam::Vec3;
use serde::Serialize;

use crate::level::Level;
use crate::platform::{FrameClock, sanitize_dt};
use crate::sim::pickup::{Pulse, ScoreRule};
use crate::sim::{CameraMode, Direction, FrameTime, GameState, InputLatch, LookAt, tick};
use crate::tuning::Tuning;

/// Render-side view of one pickup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickupView {
    pub id: String,
    pub position: Vec3,
    pub visible: bool,
    pub collected: bool,
    /// Colour pulse for pickups scored by it
    pub tint: Option<Pulse>,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub elapsed: f32,
    pub ball_position: Vec3,
    /// Ball model matrix, column-major
    pub ball_pose: [f32; 16],
    pub pickups: Vec<PickupView>,
    pub score: i32,
    pub goal: bool,
    pub game_over: bool,
    pub safe: bool,
    pub camera_mode: CameraMode,
    pub camera: LookAt,
    /// World-to-camera matrix, column-major
    pub camera_view: [f32; 16],
}

impl FrameSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A running game
#[derive(Debug, Clone)]
pub struct Session {
    level: Level,
    tuning: Tuning,
    state: GameState,
    latch: InputLatch,
    clock: FrameClock,
    /// Elapsed time for fixed-step driving via `advance`
    elapsed: f32,
}

impl Session {
    pub fn new(level: Level, tuning: Tuning) -> Self {
        let state = GameState::new(&level);
        log::info!(
            "Session started: {} zones, {} pickups",
            level.zones.len(),
            level.pickups.len()
        );
        Self {
            level,
            tuning,
            state,
            latch: InputLatch::default(),
            clock: FrameClock::new(),
            elapsed: 0.0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Latch a steering intent for the next frame
    pub fn press(&mut self, direction: Direction) {
        self.latch.press(direction);
    }

    /// Latch the steering intent bound to `key`; false if unbound
    pub fn press_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.press(direction);
                true
            }
            None => false,
        }
    }

    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.latch.switch_camera(mode);
    }

    /// Run one frame stamped with the host animation clock (milliseconds)
    pub fn frame(&mut self, now_ms: f64) -> FrameSnapshot {
        let time = self.clock.advance(now_ms, self.tuning.max_frame_dt);
        self.elapsed = time.elapsed;
        self.run(time)
    }

    /// Run one frame of `dt` seconds without a wall clock
    pub fn advance(&mut self, dt: f32) -> FrameSnapshot {
        let dt = sanitize_dt(dt, self.tuning.max_frame_dt);
        self.elapsed += dt;
        self.run(FrameTime::new(self.elapsed, dt))
    }

    /// Start over on the same level
    pub fn restart(&mut self) {
        self.state = GameState::new(&self.level);
        self.latch = InputLatch::default();
        self.clock.reset();
        self.elapsed = 0.0;
        log::info!("Session restarted");
    }

    fn run(&mut self, time: FrameTime) -> FrameSnapshot {
        let input = self.latch.take();
        tick(&mut self.state, &self.level, &input, time, &self.tuning);
        self.snapshot()
    }

    /// Current state as seen by the renderer, at the session clock
    pub fn snapshot(&self) -> FrameSnapshot {
        let state = &self.state;
        let elapsed = self.elapsed;
        let pickups = self
            .level
            .pickups
            .iter()
            .zip(&state.pickups)
            .map(|(def, pickup)| PickupView {
                id: def.id.clone(),
                position: pickup.position,
                visible: pickup.is_visible(def),
                collected: pickup.collected,
                tint: match def.rule {
                    ScoreRule::PulseSign { angular_freq } => {
                        Some(Pulse::sample(angular_freq, elapsed))
                    }
                    ScoreRule::Remap { .. } => None,
                },
            })
            .collect();

        FrameSnapshot {
            frame: state.frame,
            elapsed,
            ball_position: state.ball.position,
            ball_pose: state.ball.pose().to_cols_array(),
            pickups,
            score: state.score,
            goal: state.goal,
            game_over: state.game_over,
            safe: state.safe,
            camera_mode: state.camera.mode,
            camera: state.camera.current,
            camera_view: state.camera.current.view_matrix().to_cols_array(),
        }
    }
}
