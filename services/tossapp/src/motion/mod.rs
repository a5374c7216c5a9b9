//! Time-based motion primitives
//!
//! Interpolation curves, tweens sampled by elapsed time, and angle helpers.
//! Nothing here knows about terminals or games.

mod angle;
mod easing;
mod tween;

pub use angle::{normalize_degrees, shortest_delta};
pub use easing::Easing;
pub use tween::Tween;
