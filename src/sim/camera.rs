//! Camera targeting
//!
//! Each view mode maps the ball position to a look-at. The rig never jumps to
//! that look-at; it closes a fixed fraction of the gap every frame.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Eye, target and up vector of a view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAt {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl LookAt {
    pub const fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    /// Component-wise linear interpolation toward `other`
    pub fn lerp(&self, other: &LookAt, t: f32) -> LookAt {
        LookAt {
            eye: self.eye.lerp(other.eye, t),
            target: self.target.lerp(other.target, t),
            up: self.up.lerp(other.up, t),
        }
    }

    /// World-to-camera matrix (right-handed)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// View mode, switched only by explicit commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Owned by the host's free-look controls
    #[default]
    Free,
    /// Trails the ball from behind and above
    FollowBehind,
    /// Overhead view of the whole course
    Panorama,
}

impl CameraMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMode::Free => "Free",
            CameraMode::FollowBehind => "FollowBehind",
            CameraMode::Panorama => "Panorama",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "free" => Some(CameraMode::Free),
            "follow" | "followbehind" | "fixed" => Some(CameraMode::FollowBehind),
            "panorama" | "pano" => Some(CameraMode::Panorama),
            _ => None,
        }
    }

    /// Look-at this mode wants for a ball at `ball`
    pub fn look_at(&self, ball: Vec3, initial: &LookAt) -> LookAt {
        match self {
            CameraMode::Free => *initial,
            CameraMode::FollowBehind => LookAt::new(
                ball + Vec3::new(0.0, 2.0, 10.0),
                ball,
                Vec3::new(0.0, 1.0, 1.0),
            ),
            CameraMode::Panorama => LookAt::new(
                Vec3::new(30.0, 90.0, -30.0),
                Vec3::new(30.0, 0.0, -30.0),
                Vec3::NEG_Z,
            ),
        }
    }
}

/// Smoothed render camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    pub mode: CameraMode,
    /// Transform handed to the renderer
    pub current: LookAt,
}

impl CameraRig {
    pub fn new(initial: LookAt) -> Self {
        Self {
            mode: CameraMode::Free,
            current: initial,
        }
    }

    /// Blend toward the active mode's look-at.
    ///
    /// In `Free` mode the host drives the camera and the rig holds still.
    pub fn update(&mut self, ball: Vec3, initial: &LookAt, blend: f32) {
        if self.mode == CameraMode::Free {
            return;
        }
        let goal = self.mode.look_at(ball, initial);
        self.current = self.current.lerp(&goal, blend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> LookAt {
        LookAt::new(Vec3::new(0.0, 10.0, 20.0), Vec3::ZERO, Vec3::Y)
    }

    #[test]
    fn test_free_holds_still() {
        let mut rig = CameraRig::new(initial());
        rig.update(Vec3::new(5.0, 0.0, 5.0), &initial(), 0.1);
        assert_eq!(rig.current, initial());
    }

    #[test]
    fn test_follow_blends_ten_percent() {
        let mut rig = CameraRig::new(initial());
        rig.mode = CameraMode::FollowBehind;
        rig.update(Vec3::ZERO, &initial(), 0.1);
        // Eye goes from (0, 10, 20) toward (0, 2, 10)
        assert!((rig.current.eye.y - 9.2).abs() < 1e-5);
        assert!((rig.current.eye.z - 19.0).abs() < 1e-5);
        assert_eq!(rig.current.target, Vec3::ZERO);
    }

    #[test]
    fn test_converges_to_panorama() {
        let mut rig = CameraRig::new(initial());
        rig.mode = CameraMode::Panorama;
        for _ in 0..400 {
            rig.update(Vec3::ZERO, &initial(), 0.1);
        }
        let goal = CameraMode::Panorama.look_at(Vec3::ZERO, &initial());
        assert!(rig.current.eye.distance(goal.eye) < 1e-3);
        assert!(rig.current.target.distance(goal.target) < 1e-3);
    }

    #[test]
    fn test_follow_tracks_ball() {
        let ball = Vec3::new(3.0, -1.0, -7.0);
        let view = CameraMode::FollowBehind.look_at(ball, &initial());
        assert_eq!(view.target, ball);
        assert_eq!(view.eye, Vec3::new(3.0, 1.0, 3.0));
    }

    #[test]
    fn test_view_matrix_maps_target_forward() {
        let view = initial().view_matrix();
        // Target lies straight ahead: negative z in camera space
        let p = view.transform_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-4);
        assert!(p.z < 0.0);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(CameraMode::from_str("pano"), Some(CameraMode::Panorama));
        assert_eq!(CameraMode::from_str("Fixed"), Some(CameraMode::FollowBehind));
        assert_eq!(CameraMode::from_str("orbit"), None);
        assert_eq!(CameraMode::FollowBehind.as_str(), "FollowBehind");
    }
}
