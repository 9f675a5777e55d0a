//! Loader style attributes
//!
//! The four exposed attributes, with defaults matching the stock loader.
//! Styles load from TOML, e.g.:
//!
//! ```toml
//! ball_color = "#D20F39"
//! line_color = "#4C4F69"
//! line_width = 240.0
//! stroke_width = 3.0
//! ```

use bobble_paint::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Style configuration for the loading view
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderStyle {
    /// Fill color of all three balls
    pub ball_color: Color,
    /// Stroke color of the cord
    pub line_color: Color,
    /// Horizontal span of the cord, in pixels
    pub line_width: f32,
    /// Stroke thickness of the cord, in pixels
    pub stroke_width: f32,
}

impl Default for LoaderStyle {
    fn default() -> Self {
        Self {
            ball_color: Color::RED,
            line_color: Color::RED,
            line_width: 200.0,
            stroke_width: 2.0,
        }
    }
}

/// Failure to load a style file.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to parse loader style: {0}")]
    Parse(#[from] toml::de::Error),
}

impl LoaderStyle {
    /// Set the ball color
    pub fn ball(mut self, color: Color) -> Self {
        self.ball_color = color;
        self
    }

    /// Set the cord color
    pub fn line(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Set the cord span
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the cord thickness
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Parse a style from a TOML string; unknown keys are rejected.
    pub fn from_toml_str(input: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(input)?)
    }
}
