//! Paint context - command recording

use crate::color::Color;
use crate::path::{Path, Point};
use crate::primitives::Circle;

/// Stroke style
#[derive(Clone, Copy, Debug)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug)]
pub enum PaintCommand {
    Clear {
        color: Color,
    },
    FillCircle {
        circle: Circle,
        color: Color,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
}

/// Records paint commands for a renderer to execute
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(PaintCommand::Clear { color });
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.commands.push(PaintCommand::FillCircle {
            circle: Circle::new(Point::new(cx, cy), radius),
            color,
        });
    }

    pub fn stroke_path(&mut self, path: Path, color: Color, width: f32) {
        self.commands.push(PaintCommand::StrokePath {
            path,
            style: StrokeStyle { color, width },
        });
    }
}
