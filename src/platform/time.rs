//! Host clock handling
//!
//! The simulation trusts its `dt`. Everything the browser or OS clock can
//! throw at us (first frame, stalls, clock skew, NaN) is filtered here.

use crate::sim::FrameTime;

/// Clamp a raw frame delta to `[0, max_dt]`; non-finite becomes zero.
///
/// A non-finite or negative `max_dt` caps every frame at zero.
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::debug!("Rejected frame delta {dt}");
        return 0.0;
    }
    let max_dt = if max_dt.is_finite() { max_dt.max(0.0) } else { 0.0 };
    if dt > max_dt {
        log::warn!("Frame stalled for {dt:.3}s, capping to {max_dt:.3}s");
        return max_dt;
    }
    dt
}

/// Converts millisecond animation timestamps into frame times
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the clock for a frame stamped `now_ms`.
    ///
    /// The first frame has no predecessor and gets `dt = 0`. A timestamp
    /// earlier than the previous one is ignored for elapsed-time purposes.
    pub fn advance(&mut self, now_ms: f64, max_dt: f32) -> FrameTime {
        if !now_ms.is_finite() {
            log::debug!("Rejected frame timestamp {now_ms}");
            return FrameTime::new(self.elapsed(), 0.0);
        }

        let start = *self.start_ms.get_or_insert(now_ms);
        let raw_dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        if self.last_ms.is_none_or(|last| now_ms > last) {
            self.last_ms = Some(now_ms);
        }

        let elapsed = ((self.last_ms.unwrap_or(start) - start) / 1000.0) as f32;
        FrameTime::new(elapsed, sanitize_dt(raw_dt, max_dt))
    }

    /// Seconds between the first and the latest accepted timestamp
    pub fn elapsed(&self) -> f32 {
        match (self.start_ms, self.last_ms) {
            (Some(start), Some(last)) => ((last - start) / 1000.0) as f32,
            _ => 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016, 0.1), 0.016);
        assert_eq!(sanitize_dt(-0.5, 0.1), 0.0);
        assert_eq!(sanitize_dt(f32::NAN, 0.1), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY, 0.1), 0.0);
        assert_eq!(sanitize_dt(3.0, 0.1), 0.1);
    }

    #[test]
    fn test_bad_cap_never_yields_negative_dt() {
        assert_eq!(sanitize_dt(0.016, -0.1), 0.0);
        assert_eq!(sanitize_dt(0.016, f32::NAN), 0.0);
        assert_eq!(sanitize_dt(0.016, f32::NEG_INFINITY), 0.0);

        let mut clock = FrameClock::new();
        clock.advance(1000.0, -0.1);
        let t = clock.advance(1016.0, -0.1);
        assert_eq!(t.dt, 0.0);
        assert!(t.elapsed >= 0.0);
    }

    #[test]
    fn test_first_frame_zero_dt() {
        let mut clock = FrameClock::new();
        let t = clock.advance(5000.0, 0.1);
        assert_eq!(t.dt, 0.0);
        assert_eq!(t.elapsed, 0.0);
    }

    #[test]
    fn test_regular_frames() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0, 0.1);
        let t = clock.advance(1020.0, 0.1);
        assert!((t.dt - 0.02).abs() < 1e-6);
        assert!((t.elapsed - 0.02).abs() < 1e-6);
        let t = clock.advance(1500.0, 0.1);
        // Stall capped, elapsed still tracks the wall clock
        assert!((t.dt - 0.1).abs() < 1e-6);
        assert!((t.elapsed - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_timestamp() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0, 0.1);
        clock.advance(1100.0, 0.1);
        let t = clock.advance(1050.0, 0.1);
        assert_eq!(t.dt, 0.0);
        assert!((t.elapsed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_nan_timestamp() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0, 0.1);
        let t = clock.advance(f64::NAN, 0.1);
        assert_eq!(t.dt, 0.0);
    }
}
