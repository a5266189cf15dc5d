//! Per-frame simulation step
//!
//! Order within a step:
//! 1. apply a latched camera switch
//! 2. classify the ball's current position against the platforms
//! 3. steer horizontal velocity, apply gravity when unsupported
//! 4. integrate position and roll with the velocity from before step 3
//! 5. pickups, goal and fall floor against the integrated position
//! 6. pickup float-away and camera blend
//!
//! Once the goal is reached or the ball is lost, steps 2-4 are skipped.

use super::InputLatch;
use super::pickup::collect_pickups;
use super::state::{BallState, GameEvent, GameState};
use super::zone::is_safe;
use crate::consts::ROLL_DIVISOR;
use crate::level::Level;
use crate::tuning::Tuning;

/// Host clock readings for one frame, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Time since session start
    pub elapsed: f32,
    /// Time since the previous frame; finite and non-negative
    pub dt: f32,
}

impl FrameTime {
    pub fn new(elapsed: f32, dt: f32) -> Self {
        Self { elapsed, dt }
    }
}

/// Move one axis of velocity toward the held intent.
///
/// `toward_neg`/`toward_pos` are the intents pushing the axis negative and
/// positive. A released axis decays toward zero and stops exactly there.
pub fn steer_axis(
    v: f32,
    toward_neg: bool,
    toward_pos: bool,
    accel: f32,
    decel: f32,
    dt: f32,
) -> f32 {
    let mut v = v;
    if toward_neg {
        v -= accel * dt;
    } else if v < 0.0 {
        v = (v + decel * dt).min(0.0);
    }
    if toward_pos {
        v += accel * dt;
    } else if v > 0.0 {
        v = (v - decel * dt).max(0.0);
    }
    v
}

/// Advance the ball one frame.
///
/// `safe` suspends gravity; vertical velocity is then left as it was.
pub fn integrate_ball(
    ball: &mut BallState,
    input: &InputLatch,
    safe: bool,
    dt: f32,
    tuning: &Tuning,
) {
    let v0 = ball.velocity;

    ball.velocity.x = steer_axis(
        v0.x,
        input.left,
        input.right,
        tuning.steer_accel,
        tuning.steer_decel,
        dt,
    );
    ball.velocity.z = steer_axis(
        v0.z,
        input.forward,
        input.back,
        tuning.steer_accel,
        tuning.steer_decel,
        dt,
    );

    if !safe {
        ball.velocity.y = (v0.y - tuning.fall_accel() * dt).max(tuning.terminal_velocity);
    }

    ball.position += v0 * dt;
    ball.anglex += v0.z * dt / ROLL_DIVISOR;
    ball.anglez += v0.x * dt / ROLL_DIVISOR;
}

/// Advance the game state by one frame in place
pub fn tick(
    state: &mut GameState,
    level: &Level,
    input: &InputLatch,
    time: FrameTime,
    tuning: &Tuning,
) {
    state.events.clear();

    if let Some(mode) = input.camera {
        if mode != state.camera.mode {
            log::info!("Camera -> {}", mode.as_str());
            state.camera.mode = mode;
            state.events.push(GameEvent::CameraSwitched(mode));
        }
    }

    // Never carried over from the previous frame
    state.safe = false;

    if !state.is_terminal() {
        state.safe = is_safe(state.ball.position, &level.zones);
        integrate_ball(&mut state.ball, input, state.safe, time.dt, tuning);
    }

    let pos = state.ball.position;

    for index in collect_pickups(
        &level.pickups,
        &mut state.pickups,
        pos,
        time.elapsed,
        &mut state.score,
    ) {
        let id = level.pickups[index].id.clone();
        log::info!("Collected {} at t={:.2}s, score {}", id, time.elapsed, state.score);
        state.events.push(GameEvent::PickupCollected {
            id,
            score: state.score,
        });
    }

    if !state.goal && !state.game_over && level.goal.reached(pos, time.elapsed) {
        state.goal = true;
        log::info!("Goal reached at t={:.2}s with score {}", time.elapsed, state.score);
        state.events.push(GameEvent::GoalReached);
    }

    if !state.game_over && !state.goal && pos.y < level.fall_floor {
        state.game_over = true;
        log::info!("Ball lost at {:?}", pos);
        state.events.push(GameEvent::BallLost);
    }

    for (def, pickup) in level.pickups.iter().zip(state.pickups.iter_mut()) {
        pickup.animate(def, time.elapsed, time.dt);
    }

    state
        .camera
        .update(pos, &level.initial_camera, tuning.effective_camera_blend());

    state.frame += 1;
}

/// Value-in, value-out form of [`tick`], convenient for replay
pub fn step(
    mut state: GameState,
    level: &Level,
    input: &InputLatch,
    time: FrameTime,
    tuning: &Tuning,
) -> GameState {
    tick(&mut state, level, input, time, tuning);
    state
}
