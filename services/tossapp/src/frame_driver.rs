//! Frame ticks for running animations
//!
//! Each animation gets its own task that ticks at the frame interval and
//! reports elapsed time to the UI loop over a channel. The task stops when
//! the animation is complete or its view is torn down.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::lifecycle::{Liveness, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameEvent {
    pub view: ViewId,
    /// Time since the animation started, capped at its duration
    pub elapsed: Duration,
    pub is_final: bool,
}

#[derive(Clone)]
pub struct FrameDriver {
    tx: mpsc::Sender<FrameEvent>,
    frame_interval: Duration,
}

impl FrameDriver {
    pub fn new(frame_interval: Duration, buffer: usize) -> (Self, mpsc::Receiver<FrameEvent>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self { tx, frame_interval }, rx)
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Drive one animation of `duration` for the view behind `liveness`
    pub fn animate(&self, liveness: Liveness, duration: Duration) -> JoinHandle<()> {
        let tx = self.tx.clone();
        let period = self.frame_interval;

        tokio::spawn(async move {
            let view = liveness.view();
            let started = Instant::now();
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            tracing::debug!(
                view = %view,
                duration_ms = duration.as_millis() as u64,
                "Frame driver started"
            );

            loop {
                tokio::select! {
                    biased;
                    _ = liveness.detached() => {
                        tracing::debug!(view = %view, "View torn down, frame driver stopping");
                        return;
                    }
                    _ = ticker.tick() => {}
                }

                let elapsed = started.elapsed().min(duration);
                let is_final = elapsed >= duration;
                let event = FrameEvent {
                    view,
                    elapsed,
                    is_final,
                };

                tokio::select! {
                    biased;
                    _ = liveness.detached() => {
                        tracing::debug!(view = %view, "View torn down, frame dropped");
                        return;
                    }
                    sent = tx.send(event) => {
                        if sent.is_err() {
                            tracing::debug!(view = %view, "Frame receiver closed");
                            return;
                        }
                    }
                }

                if is_final {
                    tracing::debug!(view = %view, "Frame driver finished");
                    return;
                }
            }
        })
    }
}
