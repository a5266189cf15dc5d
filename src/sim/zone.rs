//! Safe ground classification
//!
//! Platforms are described by their footprint only: a rectangle in the
//! horizontal (x, z) plane with no vertical extent. The ball is supported
//! while its centre is over any footprint.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned platform footprint, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl SafeZone {
    pub const fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Check if a horizontal coordinate lies over this footprint.
    ///
    /// NaN coordinates fail every comparison and are never contained.
    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    /// Bounds are ordered and finite
    pub fn is_well_formed(&self) -> bool {
        [self.min_x, self.max_x, self.min_z, self.max_z]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_z <= self.max_z
    }
}

/// Returns true if `pos` is over the union of `zones`.
///
/// Evaluated fresh on every call; callers must not carry the result into
/// the next frame.
pub fn is_safe(pos: Vec3, zones: &[SafeZone]) -> bool {
    zones.iter().any(|zone| zone.contains(pos.x, pos.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_strip() -> SafeZone {
        SafeZone::new(-2.0, 2.0, -3.8, 17.0)
    }

    #[test]
    fn test_inside_start_strip() {
        assert!(is_safe(Vec3::ZERO, &[start_strip()]));
    }

    #[test]
    fn test_outside_start_strip() {
        assert!(!is_safe(Vec3::new(5.0, 0.0, 0.0), &[start_strip()]));
    }

    #[test]
    fn test_bounds_inclusive() {
        let zone = start_strip();
        assert!(zone.contains(2.0, 17.0));
        assert!(zone.contains(-2.0, -3.8));
        assert!(!zone.contains(2.0001, 0.0));
    }

    #[test]
    fn test_height_ignored() {
        assert!(is_safe(Vec3::new(0.0, -40.0, 1.0), &[start_strip()]));
        assert!(is_safe(Vec3::new(0.0, 90.0, 1.0), &[start_strip()]));
    }

    #[test]
    fn test_overlapping_union() {
        let zones = [start_strip(), SafeZone::new(-2.0, 12.0, 13.0, 16.0)];
        // Only the second zone covers this point
        assert!(is_safe(Vec3::new(10.0, 0.0, 14.0), &zones));
        // Covered by both
        assert!(is_safe(Vec3::new(0.0, 0.0, 14.0), &zones));
        assert!(!is_safe(Vec3::new(10.0, 0.0, 0.0), &zones));
    }

    #[test]
    fn test_nan_never_safe() {
        let zones = [start_strip()];
        assert!(!is_safe(Vec3::new(f32::NAN, 0.0, 0.0), &zones));
        assert!(!is_safe(Vec3::new(0.0, 0.0, f32::NAN), &zones));
    }

    #[test]
    fn test_no_zones() {
        assert!(!is_safe(Vec3::ZERO, &[]));
    }

    #[test]
    fn test_well_formed() {
        assert!(start_strip().is_well_formed());
        assert!(!SafeZone::new(2.0, -2.0, 0.0, 1.0).is_well_formed());
        assert!(!SafeZone::new(0.0, f32::INFINITY, 0.0, 1.0).is_well_formed());
    }
}
