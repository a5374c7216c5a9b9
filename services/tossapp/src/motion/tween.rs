use std::time::Duration;

use super::Easing;

/// A single animated value sampled by elapsed time
///
/// `start` offsets the tween inside a longer timeline; before it the tween
/// holds `from`, after `start + duration` it holds `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Shift the tween so it begins at `start` on the timeline
    pub fn delayed(mut self, start: Duration) -> Self {
        self.start = start;
        self
    }

    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    /// Linear progress in `[0, 1]` at `elapsed`
    pub fn fraction(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.start {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        ((elapsed - self.start).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn sample(&self, elapsed: Duration) -> f32 {
        let eased = self.easing.apply(self.fraction(elapsed));
        self.from + (self.to - self.from) * eased
    }

    /// Sample a `from -> to -> from` keyframe sequence over the same span
    pub fn sample_round_trip(&self, elapsed: Duration) -> f32 {
        let eased = self.easing.apply(self.fraction(elapsed));
        let leg = 1.0 - (2.0 * eased - 1.0).abs();
        self.from + (self.to - self.from) * leg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_linear_sampling() {
        let tween = Tween::new(0.0, 100.0, ms(1000), Easing::Linear);
        assert_eq!(tween.sample(ms(0)), 0.0);
        assert!((tween.sample(ms(250)) - 25.0).abs() < 1e-3);
        assert_eq!(tween.sample(ms(1000)), 100.0);
        assert_eq!(tween.sample(ms(5000)), 100.0);
    }

    #[test]
    fn test_delayed_holds_start_value() {
        let tween = Tween::new(-400.0, 0.0, ms(800), Easing::Linear).delayed(ms(800));
        assert_eq!(tween.end(), ms(1600));
        assert_eq!(tween.sample(ms(400)), -400.0);
        assert!((tween.sample(ms(1200)) + 200.0).abs() < 1e-3);
        assert_eq!(tween.sample(ms(1600)), 0.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = Tween::new(1.0, 2.0, Duration::ZERO, Easing::Decelerate);
        assert_eq!(tween.sample(ms(1)), 2.0);
    }

    #[test]
    fn test_round_trip_peaks_midway() {
        let tween = Tween::new(0.0, 30.0, ms(1000), Easing::Linear);
        assert_eq!(tween.sample_round_trip(ms(0)), 0.0);
        assert!((tween.sample_round_trip(ms(500)) - 30.0).abs() < 1e-3);
        assert!(tween.sample_round_trip(ms(1000)).abs() < 1e-3);
    }
}
