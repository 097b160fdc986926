//! # Arrow Rotation
//!
//! The direction arrow turns counter-clockwise from 0° (pointing down) to
//! −180° (pointing up) when the pair is reversed, and back when it isn't.
//! Progress is linear; time is passed in explicitly so the math stays testable.

use std::time::{Duration, Instant};

/// Glyphs for 0°, −45°, −90°, −135°, −180°.
const ARROW_FRAMES: [&str; 5] = ["↓", "↘", "→", "↗", "↑"];

#[derive(Debug, Clone)]
pub struct Rotation {
    duration: Duration,
    /// Angle in degrees at the start of the current transition.
    from: f32,
    /// Angle the current transition ends at (0 or −180).
    to: f32,
    started: Option<Instant>,
}

impl Rotation {
    pub fn new(duration: Duration, reversed: bool) -> Self {
        let angle = target_angle(reversed);
        Self {
            duration,
            from: angle,
            to: angle,
            started: None,
        }
    }

    /// Head towards the orientation for `reversed`, starting from wherever
    /// the arrow currently points.
    pub fn retarget(&mut self, reversed: bool, now: Instant) {
        let to = target_angle(reversed);
        if to == self.to {
            return;
        }
        self.from = self.angle_at(now);
        self.to = to;
        self.started = Some(now);
    }

    pub fn angle_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress_at(now) < 1.0
    }

    pub fn glyph_at(&self, now: Instant) -> &'static str {
        glyph_for_angle(self.angle_at(now))
    }

    fn progress_at(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

fn target_angle(reversed: bool) -> f32 {
    if reversed { -180.0 } else { 0.0 }
}

fn glyph_for_angle(angle: f32) -> &'static str {
    let step = (-angle / 45.0).round().clamp(0.0, 4.0) as usize;
    ARROW_FRAMES[step]
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn test_rest_positions() {
        let now = Instant::now();
        assert_eq!(Rotation::new(MS_300, false).glyph_at(now), "↓");
        assert_eq!(Rotation::new(MS_300, true).glyph_at(now), "↑");
        assert!(!Rotation::new(MS_300, false).is_animating(now));
    }

    #[test]
    fn test_rotation_progresses_linearly() {
        let start = Instant::now();
        let mut rotation = Rotation::new(MS_300, false);
        rotation.retarget(true, start);

        assert!(rotation.is_animating(start));
        assert_eq!(rotation.glyph_at(start), "↓");
        assert_eq!(rotation.glyph_at(start + Duration::from_millis(150)), "→");
        assert_eq!(rotation.glyph_at(start + MS_300), "↑");
        assert!(!rotation.is_animating(start + MS_300));
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current_angle() {
        let start = Instant::now();
        let mut rotation = Rotation::new(MS_300, false);
        rotation.retarget(true, start);

        let halfway = start + Duration::from_millis(150);
        rotation.retarget(false, halfway);
        assert!((rotation.angle_at(halfway) + 90.0).abs() < 0.5);
        assert_eq!(rotation.glyph_at(halfway + MS_300), "↓");
    }

    #[test]
    fn test_retarget_same_orientation_is_noop() {
        let now = Instant::now();
        let mut rotation = Rotation::new(MS_300, true);
        rotation.retarget(true, now);
        assert!(!rotation.is_animating(now));
    }

    #[test]
    fn test_zero_duration_snaps() {
        let now = Instant::now();
        let mut rotation = Rotation::new(Duration::ZERO, false);
        rotation.retarget(true, now);
        assert!(!rotation.is_animating(now));
        assert_eq!(rotation.glyph_at(now), "↑");
    }
}
