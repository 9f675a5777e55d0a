//! Bobble Paint API
//!
//! A small 2D drawing stack for the loader: color and geometry primitives,
//! path building, a command-recording paint context, a CPU rasterizer, and a
//! double-buffered pixel surface.
//!
//! Drawing is split in two: widgets record [`PaintCommand`]s through a
//! [`PaintContext`], and [`raster::execute`] replays them onto a locked
//! [`Canvas`]. Frames come back out as [`Frame`] snapshots for tests and
//! export.

pub mod color;
pub mod context;
pub mod path;
pub mod primitives;
pub mod raster;
pub mod surface;

pub use color::Color;
pub use context::{PaintCommand, PaintContext, StrokeStyle};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::Circle;
pub use surface::{Canvas, Frame, Surface, SurfaceError};
