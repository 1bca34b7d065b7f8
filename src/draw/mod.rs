//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: the capability set of drawable, hit-testable primitives
//! - [`Rectangle`], [`Circle`], [`PaintedRect`]: the concrete primitives
//! - [`Canvas`]: the raster surface shapes are painted onto
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, RenderError};
pub use color::{Color, ColorParseError};
pub use render::{render_frame, render_shapes};
pub use shape::{Circle, PaintedRect, Rectangle, Shape};

pub use color::{
    BLACK, BLUE, GREEN, LIGHT_GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW,
};
