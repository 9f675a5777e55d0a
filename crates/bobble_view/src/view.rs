//! The loading view
//!
//! Owns the style and the bounce sequence, and turns the current animation
//! offsets into one frame of paint commands: a cleared background, the curved
//! cord, the bouncing ball, and the two anchor balls.

use bobble_animation::{BounceSequence, Phase, DROP_DISTANCE};
use bobble_paint::{raster, Canvas, Color, PaintContext, PathBuilder};
use thiserror::Error;

/// Radius of all three balls.
pub const BALL_RADIUS: f32 = 10.0;

const BACKGROUND: Color = Color::WHITE;

/// Draw-pass failure
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("non-finite geometry (span {span}, sag {sag}, ball_y {ball_y}); check the style values")]
    NonFiniteGeometry { span: f32, sag: f32, ball_y: f32 },
}

/// The two-ball bounce loader.
#[derive(Clone, Debug)]
pub struct LoadingView {
    style: crate::style::LoaderStyle,
    sequence: BounceSequence,
}

impl LoadingView {
    pub fn new(style: crate::style::LoaderStyle) -> Self {
        Self {
            style,
            sequence: BounceSequence::new(),
        }
    }

    pub fn style(&self) -> &crate::style::LoaderStyle {
        &self.style
    }

    /// Begin the bounce cycle. Ignored while one is already running.
    pub fn start(&mut self) {
        self.sequence.start();
    }

    pub fn stop(&mut self) {
        self.sequence.stop();
    }

    pub fn is_animating(&self) -> bool {
        self.sequence.is_showing()
    }

    pub fn phase(&self) -> Phase {
        self.sequence.phase()
    }

    /// Advance the animation by delta time (in milliseconds).
    pub fn tick(&mut self, dt_ms: f32) {
        self.sequence.tick(dt_ms);
    }

    /// Render the current animation state onto a locked canvas.
    pub fn draw(&self, canvas: &mut Canvas<'_>) -> Result<(), DrawError> {
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let center_x = width / 2.0;
        let rest_y = height / 2.0;
        let half_span = self.style.line_width / 2.0;

        // While descending the cord sags with the ball; afterwards it follows
        // the ringing ascend offset and may bow above the rest line.
        let sag = match self.sequence.phase() {
            Phase::Descend => self.sequence.down_offset(),
            Phase::Ascend | Phase::FreeFall => DROP_DISTANCE - self.sequence.up_offset(),
        };

        // The ball sits tangent to the cord, a radius and half a stroke above
        // its track point.
        let lift = BALL_RADIUS + self.style.stroke_width / 2.0;
        let ball_y = match self.sequence.phase() {
            Phase::Descend => rest_y + self.sequence.down_offset() - lift,
            Phase::Ascend => rest_y + (DROP_DISTANCE - self.sequence.up_offset()) - lift,
            Phase::FreeFall => rest_y - self.sequence.free_fall_offset() - lift,
        };

        if !half_span.is_finite() || !sag.is_finite() || !ball_y.is_finite() {
            return Err(DrawError::NonFiniteGeometry {
                span: self.style.line_width,
                sag,
                ball_y,
            });
        }

        let mut ctx = PaintContext::new();
        ctx.clear(BACKGROUND);

        let cord = PathBuilder::new()
            .move_to(center_x - half_span, rest_y)
            .rel_quad_to(half_span, 2.0 * sag, self.style.line_width, 0.0)
            .build();
        ctx.stroke_path(cord, self.style.line_color, self.style.stroke_width);

        ctx.fill_circle(center_x, ball_y, BALL_RADIUS, self.style.ball_color);

        // Anchor balls pin the cord's endpoints
        ctx.fill_circle(center_x - half_span, rest_y, BALL_RADIUS, self.style.ball_color);
        ctx.fill_circle(center_x + half_span, rest_y, BALL_RADIUS, self.style.ball_color);

        raster::execute(ctx.commands(), canvas);
        Ok(())
    }
}
