//! Replayable input scripts.
//!
//! A script is a TOML file listing pointer steps in client coordinates, replayed one
//! step per frame by the frame loop. It stands in for a live pointer device and the
//! external color picker.
//!
//! # Example TOML
//! ```toml
//! [[step]]
//! kind = "pick"
//! color = "#ff8800"
//!
//! [[step]]
//! kind = "down"
//! x = 10
//! y = 10
//!
//! [[step]]
//! kind = "move"
//! x = 60
//! y = 40
//!
//! [[step]]
//! kind = "up"
//! x = 60
//! y = 40
//! ```
//!
//! `down` and `up` steps take an optional `button` (`left`, `right` or `middle`,
//! default `left`).

use super::events::{MouseButton, PointerEvent};
use crate::draw::{Color, ColorParseError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One scripted input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    /// Button pressed at (x, y)
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer moved to (x, y)
    Move { x: f64, y: f64 },
    /// Button released at (x, y)
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Click at (x, y)
    Click { x: f64, y: f64 },
    /// The color picker now holds `color` (name or `#rrggbb`)
    Pick { color: String },
    /// Page scrolled by (dx, dy), moving the canvas on screen
    Scroll {
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
    },
}

impl Step {
    /// Pointer event carried by this step, if it is a pointer step.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match *self {
            Step::Down { x, y, button } => Some(PointerEvent::down(x, y).with_button(button)),
            Step::Move { x, y } => Some(PointerEvent::moved(x, y)),
            Step::Up { x, y, button } => Some(PointerEvent::up(x, y).with_button(button)),
            Step::Click { x, y } => Some(PointerEvent::click(x, y)),
            Step::Pick { .. } | Step::Scroll { .. } => None,
        }
    }
}

/// Errors raised while loading an input script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read input script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse input script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("step {index}: {source}")]
    Color {
        index: usize,
        #[source]
        source: ColorParseError,
    },

    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ScriptError>,
    },
}

/// An ordered list of input steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses and validates a script from TOML text.
    ///
    /// Every `pick` step must name a paintable color.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let script: Script = toml::from_str(text)?;

        for (index, step) in script.steps.iter().enumerate() {
            if let Step::Pick { color } = step {
                color
                    .parse::<Color>()
                    .map_err(|source| ScriptError::Color { index, source })?;
            }
        }

        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let script = Self::parse(&text).map_err(|err| ScriptError::InFile {
            path: path.to_path_buf(),
            source: Box::new(err),
        })?;

        debug!(
            "Loaded {} input steps from {}",
            script.steps.len(),
            path.display()
        );
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
