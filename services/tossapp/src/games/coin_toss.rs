//! Coin toss: rise, fall, flip sweep, then settle onto the drawn face

use rand::Rng;
use shared::{
    CoinFace, GameError, COIN_FALL_MS, COIN_RISE_HEIGHT, COIN_RISE_MS, COIN_SETTLE_MS,
    COIN_TILT_DEGREES,
};
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::animator::{Animation, AnimationPhase, Animator, Step};
use crate::config::CoinConfig;
use crate::motion::{shortest_delta, Easing, Tween};
use crate::random::{draw_coin_face, draw_flip_count};

/// Coin pose at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinFrame {
    /// Vertical offset; negative is up
    pub translation_y: f32,
    /// Flip rotation in degrees (unbounded; the face is read modulo 360)
    pub rotation_y: f32,
    /// Tilt toward the viewer in degrees
    pub rotation_x: f32,
    pub face: CoinFace,
}

impl CoinFrame {
    /// Coin on the table, heads up
    pub fn rest() -> Self {
        Self {
            translation_y: 0.0,
            rotation_y: 0.0,
            rotation_x: 0.0,
            face: CoinFace::Heads,
        }
    }
}

impl Default for CoinFrame {
    fn default() -> Self {
        Self::rest()
    }
}

/// One toss, with its outcome decided before the first frame
#[derive(Debug, Clone)]
pub struct CoinFlight {
    face: CoinFace,
    flips: u32,
    rise: Tween,
    fall: Tween,
    sweep: Tween,
    tilt: Tween,
    settle: Tween,
}

impl CoinFlight {
    pub fn plan(face: CoinFace, flips: u32) -> Self {
        let rise_time = Duration::from_millis(COIN_RISE_MS);
        let fall_time = Duration::from_millis(COIN_FALL_MS);
        let flight_time = rise_time + fall_time;
        let sweep_end = 360.0 * flips as f32;
        let settle_end = sweep_end + shortest_delta(sweep_end, face.canonical_rotation());

        Self {
            face,
            flips,
            rise: Tween::new(0.0, COIN_RISE_HEIGHT, rise_time, Easing::Decelerate),
            fall: Tween::new(COIN_RISE_HEIGHT, 0.0, fall_time, Easing::AccelerateDecelerate)
                .delayed(rise_time),
            sweep: Tween::new(0.0, sweep_end, flight_time, Easing::AccelerateDecelerate),
            tilt: Tween::new(0.0, COIN_TILT_DEGREES, flight_time, Easing::AccelerateDecelerate),
            settle: Tween::new(
                sweep_end,
                settle_end,
                Duration::from_millis(COIN_SETTLE_MS),
                Easing::Decelerate,
            )
            .delayed(flight_time),
        }
    }

    pub fn face(&self) -> CoinFace {
        self.face
    }

    pub fn flips(&self) -> u32 {
        self.flips
    }

    /// End of the up/down travel; the settle phase follows
    pub fn flight_duration(&self) -> Duration {
        self.fall.end()
    }
}

impl Animation for CoinFlight {
    type Outcome = CoinFace;
    type Frame = CoinFrame;

    fn duration(&self) -> Duration {
        self.settle.end()
    }

    fn outcome(&self) -> &CoinFace {
        &self.face
    }

    fn frame_at(&self, elapsed: Duration) -> CoinFrame {
        let translation_y = if elapsed < self.rise.end() {
            self.rise.sample(elapsed)
        } else {
            self.fall.sample(elapsed)
        };
        let rotation_y = if elapsed < self.sweep.end() {
            self.sweep.sample(elapsed)
        } else {
            self.settle.sample(elapsed)
        };

        CoinFrame {
            translation_y,
            rotation_y,
            rotation_x: self.tilt.sample_round_trip(elapsed),
            face: CoinFace::visible_at(rotation_y),
        }
    }
}

/// Coin toss game state for one mounted view
pub struct CoinToss {
    animator: Animator<CoinFlight>,
    flips: RangeInclusive<u32>,
    frame: CoinFrame,
}

impl CoinToss {
    pub fn new(config: &CoinConfig) -> Self {
        let low = config.min_flips.min(config.max_flips).max(1);
        let high = config.max_flips.max(low);
        Self {
            animator: Animator::new(),
            flips: low..=high,
            frame: CoinFrame::rest(),
        }
    }

    /// Draw a face and flip count, then start the flight
    pub fn toss<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&CoinFlight, GameError> {
        let flips = self.flips.clone();
        let flight = self.animator.start_with(|| {
            let face = draw_coin_face(rng);
            let count = draw_flip_count(rng, flips);
            Ok(CoinFlight::plan(face, count))
        })?;

        self.frame = CoinFrame::rest();
        tracing::info!(
            face = %flight.face(),
            flips = flight.flips(),
            duration_ms = flight.duration().as_millis() as u64,
            "Coin tossed"
        );
        Ok(flight)
    }

    /// Apply the frame at `elapsed`; returns the face once the coin settles
    pub fn advance_to(&mut self, elapsed: Duration) -> Option<CoinFace> {
        match self.animator.advance_to(elapsed)? {
            Step::Running(frame) => {
                self.frame = frame;
                None
            }
            Step::Settled { frame, outcome } => {
                self.frame = frame;
                tracing::info!(face = %outcome, "Coin settled");
                Some(outcome)
            }
        }
    }

    pub fn frame(&self) -> &CoinFrame {
        &self.frame
    }

    pub fn result_label(&self) -> Option<&'static str> {
        self.animator.displayed_outcome().map(CoinFace::label)
    }

    pub fn trigger_enabled(&self) -> bool {
        self.animator.trigger_enabled()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    pub fn in_flight(&self) -> Option<&CoinFlight> {
        self.animator.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_timeline_shape() {
        let flight = CoinFlight::plan(CoinFace::Heads, 4);
        assert_eq!(flight.flight_duration(), ms(1600));
        assert_eq!(flight.duration(), ms(1850));

        let start = flight.frame_at(Duration::ZERO);
        assert!(start.translation_y.abs() < 1e-3);
        assert!(start.rotation_y.abs() < 1e-3);
        assert!(start.rotation_x.abs() < 1e-3);
        assert_eq!(start.face, CoinFace::Heads);

        let apex = flight.frame_at(ms(800));
        assert!((apex.translation_y - COIN_RISE_HEIGHT).abs() < 1e-3);

        let landed = flight.frame_at(ms(1600));
        assert!(landed.translation_y.abs() < 1e-3);
        assert!(landed.rotation_x.abs() < 1e-3);
        assert!((landed.rotation_y - 1440.0).abs() < 1e-2);
    }

    #[test]
    fn test_tails_settles_half_turn_forward() {
        let flight = CoinFlight::plan(CoinFace::Tails, 5);
        let last = flight.frame_at(flight.duration());
        assert!((last.rotation_y - 1980.0).abs() < 1e-2);
        assert_eq!(last.face, CoinFace::Tails);
    }

    #[test]
    fn test_heads_settle_is_still() {
        let flight = CoinFlight::plan(CoinFace::Heads, 6);
        let landed = flight.frame_at(flight.flight_duration());
        let last = flight.frame_at(flight.duration());
        assert_eq!(landed.rotation_y, last.rotation_y);
        assert_eq!(last.face, CoinFace::Heads);
    }

    #[test]
    fn test_face_follows_rotation_every_frame() {
        let flight = CoinFlight::plan(CoinFace::Tails, 7);
        let mut t = Duration::ZERO;
        while t <= flight.duration() {
            let frame = flight.frame_at(t);
            assert_eq!(frame.face, CoinFace::visible_at(frame.rotation_y));
            t += ms(5);
        }
    }

    #[test]
    fn test_toss_resets_result_and_disables_trigger() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = CoinToss::new(&CoinConfig::default());
        game.toss(&mut rng).unwrap();
        assert!(!game.trigger_enabled());
        assert_eq!(game.result_label(), None);
        assert_eq!(game.phase(), AnimationPhase::Animating);
    }
}
