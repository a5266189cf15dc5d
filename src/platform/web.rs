//! Browser bindings
//!
//! The page keeps its own renderer and calls into this wrapper: key handlers
//! call `press`, the view buttons call `set_camera`, and the
//! `requestAnimationFrame` callback calls `frame` and draws the JSON it gets
//! back.

use wasm_bindgen::prelude::*;

use crate::level::Level;
use crate::session::Session;
use crate::sim::CameraMode;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialised by an earlier instance
        log::debug!("console logger already set");
    }
    log::info!("Balance Ball starting...");
}

#[wasm_bindgen]
pub struct BalanceBall {
    session: Session,
}

#[wasm_bindgen]
impl BalanceBall {
    /// Start on the reference course
    #[wasm_bindgen(constructor)]
    pub fn new() -> BalanceBall {
        Self {
            session: Session::new(Level::reference(), Tuning::default()),
        }
    }

    /// Start on a level given as JSON, with optional tuning JSON
    pub fn with_level(
        level_json: &str,
        tuning_json: Option<String>,
    ) -> Result<BalanceBall, JsValue> {
        let level = Level::from_json(level_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let tuning = match tuning_json {
            Some(json) => {
                Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => Tuning::default(),
        };
        Ok(Self {
            session: Session::new(level, tuning),
        })
    }

    /// Latch the steering intent bound to `key`; false if unbound
    pub fn press(&mut self, key: &str) -> bool {
        self.session.press_key(key)
    }

    /// Switch view: "free", "follow" or "panorama"
    pub fn set_camera(&mut self, mode: &str) -> bool {
        match CameraMode::from_str(mode) {
            Some(mode) => {
                self.session.set_camera_mode(mode);
                true
            }
            None => {
                log::warn!("Unknown camera mode '{}'", mode);
                false
            }
        }
    }

    /// Advance one animation frame and return the snapshot as JSON
    pub fn frame(&mut self, now_ms: f64) -> Result<String, JsValue> {
        self.session
            .frame(now_ms)
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn score(&self) -> i32 {
        self.session.state().score
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }
}

impl Default for BalanceBall {
    fn default() -> Self {
        Self::new()
    }
}
