//! Easing functions for animations

/// Exponential decay rate of the shock curve.
const SHOCK_DECAY: f32 = 3.0;
/// Angular frequency of the shock curve's cosine term.
const SHOCK_FREQUENCY: f32 = 10.0;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Starts slow and speeds up: `t²`
    Accelerate,
    /// Starts fast and slows down: `1 - (1-t)²`
    Decelerate,
    /// Overshoots and rings down around 1: `1 - e^(-3t)·cos(10t)`
    Shock,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Accelerate => t * t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Shock => {
                1.0 - (-SHOCK_DECAY * t).exp() * (SHOCK_FREQUENCY * t).cos()
            }
        }
    }
}
