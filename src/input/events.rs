//! Generic pointer event types shared by the painter and the layered scene.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (primary button, drives drags and clicks)
    #[default]
    Left,
    /// Right mouse button (ignored by the painter)
    Right,
    /// Middle mouse button (ignored by the painter)
    Middle,
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed
    Down,
    /// Pointer moved (with or without a button held)
    Move,
    /// Button released
    Up,
    /// Press and release at the same spot
    Click,
}

impl PointerKind {
    /// Name under which the event is emitted to shape listeners.
    pub fn event_name(self) -> &'static str {
        match self {
            PointerKind::Down => "pointerdown",
            PointerKind::Move => "pointermove",
            PointerKind::Up => "pointerup",
            PointerKind::Click => "click",
        }
    }
}

/// A raw pointer event in client (screen) coordinates.
///
/// Consumers convert `client` to canvas space through
/// [`crate::draw::Canvas::to_canvas`] at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: MouseButton,
    pub client: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            button: MouseButton::Left,
            client: Point::new(x, y),
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub fn click(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Click, x, y)
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }
}
