//! Balance Ball entry point
//!
//! The web build runs through the library's wasm bindings. Natively this is
//! a headless runner: it plays a scripted route over a level (the reference
//! course, or a JSON file given as the first argument) and logs the outcome.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use balance_ball::consts::SIM_DT;
    use balance_ball::sim::{CameraMode, Direction};
    use balance_ball::{Level, Session, Tuning};

    env_logger::init();
    log::info!("Balance Ball (native) starting...");

    let level = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| Level::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(level) => level,
                Err(e) => {
                    log::error!("Could not load level {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => Level::reference(),
    };

    let mut session = Session::new(level, Tuning::default());
    session.set_camera_mode(CameraMode::FollowBehind);

    // Hold "back" toward the bonuses, then coast
    let script: &[(Option<Direction>, u32)] = &[
        (Some(Direction::Back), 30),
        (None, 120),
        (Some(Direction::Right), 12),
        (None, 240),
    ];

    let mut last = session.advance(SIM_DT);
    'script: for &(held, frames) in script {
        for _ in 0..frames {
            if let Some(direction) = held {
                session.press(direction);
            }
            last = session.advance(SIM_DT);
            if last.goal || last.game_over {
                break 'script;
            }
        }
    }

    log::info!(
        "Finished after {} frames: score {}, goal {}, game over {}, ball at {:?}",
        last.frame,
        last.score,
        last.goal,
        last.game_over,
        last.ball_position
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
