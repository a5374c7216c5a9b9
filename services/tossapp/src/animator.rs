//! Outcome animator state machine
//!
//! `Idle -> Animating -> Settled -> Idle`. Idle and Settled are the same rest
//! state; they differ only in whether a result is on display. The outcome is
//! drawn when the animation starts, before any frame is sampled.

use shared::GameError;
use std::time::Duration;

/// A timed animation whose outcome is fixed at construction
pub trait Animation {
    type Outcome: Clone;
    type Frame;

    fn duration(&self) -> Duration;
    fn outcome(&self) -> &Self::Outcome;
    fn frame_at(&self, elapsed: Duration) -> Self::Frame;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Animating,
    Settled,
}

/// What one frame tick produced
#[derive(Debug, Clone, PartialEq)]
pub enum Step<F, O> {
    Running(F),
    /// Final frame, delivered together with the outcome to display
    Settled { frame: F, outcome: O },
}

struct Running<A> {
    animation: A,
    elapsed: Duration,
}

pub struct Animator<A: Animation> {
    running: Option<Running<A>>,
    displayed: Option<A::Outcome>,
}

impl<A: Animation> Default for Animator<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Animation> Animator<A> {
    pub fn new() -> Self {
        Self {
            running: None,
            displayed: None,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        match (&self.running, &self.displayed) {
            (Some(_), _) => AnimationPhase::Animating,
            (None, Some(_)) => AnimationPhase::Settled,
            (None, None) => AnimationPhase::Idle,
        }
    }

    /// The trigger control is disabled for the whole animation
    pub fn trigger_enabled(&self) -> bool {
        self.running.is_none()
    }

    pub fn displayed_outcome(&self) -> Option<&A::Outcome> {
        self.displayed.as_ref()
    }

    pub fn current(&self) -> Option<&A> {
        self.running.as_ref().map(|r| &r.animation)
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.running.as_ref().map(|r| r.elapsed)
    }

    /// Start a new animation built by `draw`
    ///
    /// `draw` is not called while another animation is in flight, so a
    /// rejected trigger consumes no randomness. A failed draw leaves the
    /// animator and the displayed result untouched.
    pub fn start_with<F>(&mut self, draw: F) -> Result<&A, GameError>
    where
        F: FnOnce() -> Result<A, GameError>,
    {
        if self.running.is_some() {
            return Err(GameError::AnimationInFlight);
        }

        let animation = draw()?;
        self.displayed = None;

        let running = self.running.insert(Running {
            animation,
            elapsed: Duration::ZERO,
        });
        Ok(&running.animation)
    }

    /// Move the animation to `elapsed` since its start
    ///
    /// Returns `None` when idle. Reaching the duration settles the animator.
    pub fn advance_to(&mut self, elapsed: Duration) -> Option<Step<A::Frame, A::Outcome>> {
        let running = self.running.as_mut()?;
        let duration = running.animation.duration();
        let clamped = elapsed.min(duration).max(running.elapsed);
        running.elapsed = clamped;

        let frame = running.animation.frame_at(clamped);
        if clamped < duration {
            return Some(Step::Running(frame));
        }

        let finished = self.running.take()?;
        let outcome = finished.animation.outcome().clone();
        self.displayed = Some(outcome.clone());
        Some(Step::Settled { frame, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        outcome: u8,
        duration: Duration,
    }

    impl Animation for Countdown {
        type Outcome = u8;
        type Frame = u128;

        fn duration(&self) -> Duration {
            self.duration
        }

        fn outcome(&self) -> &u8 {
            &self.outcome
        }

        fn frame_at(&self, elapsed: Duration) -> u128 {
            elapsed.as_millis()
        }
    }

    fn countdown(outcome: u8) -> Result<Countdown, GameError> {
        Ok(Countdown {
            outcome,
            duration: Duration::from_millis(100),
        })
    }

    #[test]
    fn test_full_cycle() {
        let mut animator: Animator<Countdown> = Animator::new();
        assert_eq!(animator.phase(), AnimationPhase::Idle);
        assert!(animator.advance_to(Duration::from_millis(10)).is_none());

        animator.start_with(|| countdown(3)).unwrap();
        assert_eq!(animator.phase(), AnimationPhase::Animating);
        assert!(!animator.trigger_enabled());

        assert_eq!(
            animator.advance_to(Duration::from_millis(40)),
            Some(Step::Running(40))
        );
        assert_eq!(
            animator.advance_to(Duration::from_millis(250)),
            Some(Step::Settled { frame: 100, outcome: 3 })
        );
        assert_eq!(animator.phase(), AnimationPhase::Settled);
        assert!(animator.trigger_enabled());
        assert_eq!(animator.displayed_outcome(), Some(&3));
    }

    #[test]
    fn test_second_start_rejected_without_drawing() {
        let mut animator: Animator<Countdown> = Animator::new();
        animator.start_with(|| countdown(1)).unwrap();

        let mut drew = false;
        let result = animator.start_with(|| {
            drew = true;
            countdown(2)
        });
        assert!(matches!(result, Err(GameError::AnimationInFlight)));
        assert!(!drew);
        assert_eq!(animator.current().map(|a| a.outcome), Some(1));
    }

    #[test]
    fn test_failed_draw_keeps_previous_result() {
        let mut animator: Animator<Countdown> = Animator::new();
        animator.start_with(|| countdown(5)).unwrap();
        animator.advance_to(Duration::from_secs(1));

        let result = animator.start_with(|| Err::<Countdown, _>(GameError::NoPlayers));
        assert_eq!(result.err(), Some(GameError::NoPlayers));
        assert_eq!(animator.phase(), AnimationPhase::Settled);
        assert_eq!(animator.displayed_outcome(), Some(&5));
    }

    #[test]
    fn test_new_start_clears_displayed_result() {
        let mut animator: Animator<Countdown> = Animator::new();
        animator.start_with(|| countdown(5)).unwrap();
        animator.advance_to(Duration::from_secs(1));
        animator.start_with(|| countdown(6)).unwrap();
        assert_eq!(animator.displayed_outcome(), None);
    }

    #[test]
    fn test_elapsed_never_goes_backwards() {
        let mut animator: Animator<Countdown> = Animator::new();
        animator.start_with(|| countdown(0)).unwrap();
        animator.advance_to(Duration::from_millis(60));
        assert_eq!(
            animator.advance_to(Duration::from_millis(20)),
            Some(Step::Running(60))
        );
    }
}
