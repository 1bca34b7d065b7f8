//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings shared by the painter and the layered scene.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Logical canvas width (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Logical canvas height (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Device-pixel ratio applied to the backing surface (valid range: 0.5 - 4.0)
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,

    /// Color the canvas is cleared to before every frame
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Horizontal position of the canvas on screen, in client coordinates
    #[serde(default)]
    pub offset_x: f64,

    /// Vertical position of the canvas on screen, in client coordinates
    #[serde(default)]
    pub offset_y: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            device_pixel_ratio: default_device_pixel_ratio(),
            background: default_background(),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Rectangle painter settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PainterConfig {
    /// Initial color picker value - a named color, `#rrggbb`, or an RGB array
    #[serde(default = "default_paint_color")]
    pub default_color: ColorSpec,

    /// Border color drawn around every rectangle
    #[serde(default = "default_border_color")]
    pub border_color: ColorSpec,

    /// Border width in logical units (valid range: 0.0 - 20.0, 0 disables borders)
    #[serde(default = "default_border_width")]
    pub border_width: f64,

    /// Maximum number of rectangles (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            default_color: default_paint_color(),
            border_color: default_border_color(),
            border_width: default_border_width(),
            max_shapes: 0,
        }
    }
}

/// Frame loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Frames per second of the redraw loop (valid range: 1 - 240)
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Hard cap on rendered frames per run (valid range: 1 - 1000000)
    #[serde(default = "default_max_frames")]
    pub max_frames: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            max_frames: default_max_frames(),
        }
    }
}

fn default_width() -> u32 {
    600
}

fn default_height() -> u32 {
    400
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("transparent".to_string())
}

fn default_paint_color() -> ColorSpec {
    ColorSpec::Name("#3366ff".to_string())
}

fn default_border_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_border_width() -> f64 {
    3.0
}

fn default_fps() -> u32 {
    60
}

fn default_max_frames() -> u64 {
    10_000
}
