//! Library exports for the shapeboard canvas programs.
//!
//! Exposes the drawing primitives, the shape scene with its per-shape event
//! listeners, the drag-to-paint rectangle painter and the frame loop, so tests and
//! external tools can drive the same code the binary runs.

pub mod app;
pub mod config;
pub mod demo;
pub mod draw;
pub mod event;
pub mod input;
pub mod painter;
pub mod runtime;
pub mod scene;
pub mod util;

pub use config::Config;
