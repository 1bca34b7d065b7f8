//! Configuration file support for shapeboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapeboard/config.toml`. Settings include the canvas geometry,
//! painter defaults and frame loop tuning.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, PainterConfig, RenderConfig};

use crate::draw::{Canvas, RenderError};
use crate::painter::PaintStyle;
use crate::util::Point;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 500
/// height = 300
/// device_pixel_ratio = 2.0
/// background = "black"
///
/// [painter]
/// default_color = "#3366ff"
/// border_color = "white"
/// border_width = 3.0
///
/// [render]
/// fps = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas geometry and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Rectangle painter defaults
    #[serde(default)]
    pub painter: PainterConfig,

    /// Frame loop tuning
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - `canvas.device_pixel_ratio`: 0.5 - 4.0
    /// - `painter.border_width`: 0.0 - 20.0
    /// - `render.fps`: 1 - 240
    /// - `render.max_frames`: 1 - 1000000
    fn validate_and_clamp(&mut self) {
        if !(1..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        // NaN fails the range check and would survive clamp(), so reset it explicitly.
        if self.canvas.device_pixel_ratio.is_nan() {
            log::warn!("Invalid device_pixel_ratio NaN, using 1.0");
            self.canvas.device_pixel_ratio = 1.0;
        } else if !(0.5..=4.0).contains(&self.canvas.device_pixel_ratio) {
            log::warn!(
                "Invalid device_pixel_ratio {:.2}, clamping to 0.5-4.0 range",
                self.canvas.device_pixel_ratio
            );
            self.canvas.device_pixel_ratio = self.canvas.device_pixel_ratio.clamp(0.5, 4.0);
        }

        if self.painter.border_width.is_nan() {
            log::warn!("Invalid border_width NaN, using 3.0");
            self.painter.border_width = 3.0;
        } else if !(0.0..=20.0).contains(&self.painter.border_width) {
            log::warn!(
                "Invalid border_width {:.1}, clamping to 0.0-20.0 range",
                self.painter.border_width
            );
            self.painter.border_width = self.painter.border_width.clamp(0.0, 20.0);
        }

        if !(1..=240).contains(&self.render.fps) {
            log::warn!("Invalid fps {}, clamping to 1-240 range", self.render.fps);
            self.render.fps = self.render.fps.clamp(1, 240);
        }

        if !(1..=1_000_000).contains(&self.render.max_frames) {
            log::warn!(
                "Invalid max_frames {}, clamping to 1-1000000 range",
                self.render.max_frames
            );
            self.render.max_frames = self.render.max_frames.clamp(1, 1_000_000);
        }

        for (field, spec) in [
            ("canvas.background", &self.canvas.background),
            ("painter.default_color", &self.painter.default_color),
            ("painter.border_color", &self.painter.border_color),
        ] {
            if !spec.is_valid() {
                log::warn!("Invalid color for {field}: {spec:?}; it will render as red");
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shapeboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapeboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn parse(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory
    /// and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Creates the canvas described by the `[canvas]` section.
    pub fn build_canvas(&self) -> Result<Canvas, RenderError> {
        Canvas::new(
            self.canvas.width,
            self.canvas.height,
            self.canvas.device_pixel_ratio,
            Point::new(self.canvas.offset_x, self.canvas.offset_y),
        )
    }

    /// Painter appearance derived from the `[canvas]` and `[painter]` sections.
    pub fn paint_style(&self) -> PaintStyle {
        PaintStyle {
            background: self.canvas.background.to_color(),
            border_color: self.painter.border_color.to_color(),
            border_width: self.painter.border_width,
            max_shapes: self.painter.max_shapes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, TRANSPARENT, WHITE};

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.canvas.width, 600);
        assert_eq!(config.canvas.height, 400);
        assert_eq!(config.render.fps, 60);
        assert_eq!(config.painter.border_width, 3.0);
        assert_eq!(config.canvas.background.to_color(), TRANSPARENT);
        assert_eq!(config.painter.border_color.to_color(), WHITE);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r##"
[canvas]
width = 500
device_pixel_ratio = 2.0

[painter]
default_color = [0, 0, 255]
"##,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 500);
        assert_eq!(config.canvas.height, 400);
        assert_eq!(config.canvas.device_pixel_ratio, 2.0);
        assert_eq!(config.painter.default_color.to_color(), BLUE);
        assert_eq!(config.painter.max_shapes, 0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::parse(
            r#"
[canvas]
width = 0
height = 100000
device_pixel_ratio = 9.0

[painter]
border_width = -4.0

[render]
fps = 1000
max_frames = 0
"#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.canvas.device_pixel_ratio, 4.0);
        assert_eq!(config.painter.border_width, 0.0);
        assert_eq!(config.render.fps, 240);
        assert_eq!(config.render.max_frames, 1);
    }

    #[test]
    fn nan_ratio_is_reset() {
        let mut config = Config::default();
        config.canvas.device_pixel_ratio = f64::NAN;
        config.validate_and_clamp();
        assert_eq!(config.canvas.device_pixel_ratio, 1.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse("[canvas\nwidth = 1").is_err());
    }

    #[test]
    fn example_config_parses_and_is_in_range() {
        let mut config = Config::parse(include_str!("../../config.example.toml")).unwrap();
        let before = format!("{config:?}");
        config.validate_and_clamp();
        assert_eq!(before, format!("{config:?}"));
    }

    #[test]
    fn load_from_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render]\nfps = 30\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.render.fps, 30);

        assert!(Config::load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["canvas", "painter", "render"] {
            assert!(schema.contains(section), "schema lacks {section}");
        }
    }

    #[test]
    fn config_builds_matching_canvas_and_style() {
        let mut config = Config::default();
        config.canvas.offset_x = 8.0;
        config.painter.max_shapes = 3;

        let canvas = config.build_canvas().unwrap();
        assert_eq!(canvas.width(), 600);
        assert_eq!(canvas.offset(), Point::new(8.0, 0.0));
        assert_eq!(config.paint_style().max_shapes, 3);
        assert_eq!(config.paint_style().border_color, WHITE);
    }
}
