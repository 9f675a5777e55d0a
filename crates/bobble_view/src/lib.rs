//! Bobble Loading View
//!
//! A two-ball loading indicator: two anchor balls joined by a curved cord,
//! with a third ball that rides the cord down, launches upward, and follows a
//! free-fall arc on an infinite loop.
//!
//! [`LoadingView`] is the deterministic core (tick + draw); [`RenderLoop`]
//! runs it on a background thread against a [`bobble_paint::Surface`] at a
//! fixed ~16 ms cadence.

pub mod render_loop;
pub mod style;
pub mod view;

pub use render_loop::RenderLoop;
pub use style::{LoaderStyle, StyleError};
pub use view::{DrawError, LoadingView};
