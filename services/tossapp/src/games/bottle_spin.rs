//! Bottle spin: one decelerating rotation onto a randomly drawn player

use rand::Rng;
use shared::{GameError, PlayerName, SpinResult, SPIN_JITTER_DEGREES};
use std::time::Duration;

use crate::animator::{Animation, AnimationPhase, Animator, Step};
use crate::config::BottleConfig;
use crate::motion::{normalize_degrees, Easing, Tween};
use crate::random::{draw_jitter, draw_random_index};

/// A single spin from the resting angle to the drawn player's direction
#[derive(Debug, Clone)]
pub struct BottleRotation {
    result: SpinResult,
    player_count: usize,
    base_angle: f32,
    jitter: f32,
    tween: Tween,
}

impl BottleRotation {
    /// Plan a rotation that ends pointing at `names[index]`
    ///
    /// Target = 360/N * index + jitter + 360 * extra_turns, measured clockwise
    /// from 12 o'clock, starting from `from`.
    pub fn plan(
        from: f32,
        names: &[PlayerName],
        index: usize,
        jitter: f32,
        extra_turns: u32,
        duration: Duration,
    ) -> Result<Self, GameError> {
        let result = SpinResult::resolve(names, index)?;
        let player_count = names.len();
        let base_angle = 360.0 / player_count as f32 * index as f32;
        let target = base_angle + jitter + 360.0 * extra_turns as f32;

        Ok(Self {
            result,
            player_count,
            base_angle,
            jitter,
            tween: Tween::new(from, target, duration, Easing::Decelerate),
        })
    }

    pub fn result(&self) -> &SpinResult {
        &self.result
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Direction of the drawn player before jitter and extra turns
    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }

    pub fn jitter(&self) -> f32 {
        self.jitter
    }

    pub fn start_angle(&self) -> f32 {
        self.tween.from
    }

    pub fn target_angle(&self) -> f32 {
        self.tween.to
    }

    /// Where the bottle rests after this spin, folded into `[0, 360)`
    pub fn resting_angle(&self) -> f32 {
        normalize_degrees(self.tween.to)
    }
}

impl Animation for BottleRotation {
    type Outcome = SpinResult;
    type Frame = f32;

    fn duration(&self) -> Duration {
        self.tween.end()
    }

    fn outcome(&self) -> &SpinResult {
        &self.result
    }

    fn frame_at(&self, elapsed: Duration) -> f32 {
        self.tween.sample(elapsed)
    }
}

/// Bottle spin game state for one mounted view
pub struct BottleSpin {
    animator: Animator<BottleRotation>,
    extra_turns: u32,
    duration: Duration,
    resting_angle: f32,
    angle: f32,
}

impl BottleSpin {
    pub fn new(config: &BottleConfig) -> Self {
        Self {
            animator: Animator::new(),
            extra_turns: config.extra_turns,
            duration: config.spin_duration(),
            resting_angle: 0.0,
            angle: 0.0,
        }
    }

    /// Draw a player and start spinning toward them
    ///
    /// Refused with `NoPlayers` when the list is empty; the animator stays at
    /// rest and no randomness is consumed.
    pub fn spin<R: Rng + ?Sized>(
        &mut self,
        names: &[PlayerName],
        rng: &mut R,
    ) -> Result<&BottleRotation, GameError> {
        let from = self.resting_angle;
        let extra_turns = self.extra_turns;
        let duration = self.duration;

        let rotation = self.animator.start_with(|| {
            let index = draw_random_index(rng, names.len()).ok_or(GameError::NoPlayers)?;
            let jitter = draw_jitter(rng, SPIN_JITTER_DEGREES);
            BottleRotation::plan(from, names, index, jitter, extra_turns, duration)
        })?;

        tracing::info!(
            players = rotation.player_count(),
            index = rotation.result().index,
            from = rotation.start_angle(),
            to = rotation.target_angle(),
            "Bottle spun"
        );
        Ok(rotation)
    }

    /// Apply the angle at `elapsed`; returns the result once the bottle stops
    pub fn advance_to(&mut self, elapsed: Duration) -> Option<SpinResult> {
        match self.animator.advance_to(elapsed)? {
            Step::Running(angle) => {
                self.angle = angle;
                None
            }
            Step::Settled { frame, outcome } => {
                self.angle = frame;
                self.resting_angle = normalize_degrees(frame);
                tracing::info!(
                    index = outcome.index,
                    name = %outcome.name,
                    resting_angle = self.resting_angle,
                    "Bottle stopped"
                );
                Some(outcome)
            }
        }
    }

    /// Current bottle angle in `[0, 360)`, clockwise from 12 o'clock
    pub fn angle(&self) -> f32 {
        normalize_degrees(self.angle)
    }

    pub fn resting_angle(&self) -> f32 {
        self.resting_angle
    }

    /// Last settled result, cleared when the next spin starts
    pub fn result(&self) -> Option<&SpinResult> {
        self.animator.displayed_outcome()
    }

    pub fn result_label(&self) -> Option<String> {
        self.result().map(SpinResult::label)
    }

    pub fn trigger_enabled(&self) -> bool {
        self.animator.trigger_enabled()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    pub fn in_flight(&self) -> Option<&BottleRotation> {
        self.animator.current()
    }
}
