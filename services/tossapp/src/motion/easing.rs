use std::f32::consts::PI;

/// Interpolation curves applied to a tween's linear progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Starts fast, slows into the end: `1 - (1 - t)^2`
    Decelerate,
    /// Slow start and end, fastest in the middle
    AccelerateDecelerate,
}

impl Easing {
    /// Map linear progress to eased progress; input is clamped to `[0, 1]`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}
