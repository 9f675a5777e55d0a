//! Bobble Animation System
//!
//! Easing curves, single-value animators, and the three-phase bounce
//! sequence that drives the loader.
//!
//! # Features
//!
//! - **Easing**: the decelerate, accelerate, and shock (damped-cosine) curves
//! - **Value Animators**: fixed-duration float sweeps with gapless chaining
//! - **Free-Fall Kinematics**: closed-form launch/rebound displacement
//! - **Bounce Sequence**: descend → ascend → free-fall, looping forever

pub mod animator;
pub mod easing;
pub mod freefall;
pub mod sequence;

pub use animator::ValueAnimator;
pub use easing::Easing;
pub use sequence::{BounceSequence, Phase, DROP_DISTANCE};
