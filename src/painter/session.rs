//! Drag session state machine.

use crate::draw::PaintedRect;
use crate::util::Point;

/// What the current drag does to its shape.
#[derive(Debug, Clone, PartialEq)]
pub enum DragMode {
    /// A new rectangle is being created; its far corner follows the pointer.
    Create {
        /// Index of the new rectangle in the painter's shape list
        index: usize,
    },
    /// An existing rectangle is being moved.
    Move {
        /// Index of the moved rectangle
        index: usize,
        /// The rectangle as it was when the drag started
        snapshot: PaintedRect,
    },
}

impl DragMode {
    pub fn index(&self) -> usize {
        match self {
            DragMode::Create { index } | DragMode::Move { index, .. } => *index,
        }
    }
}

/// Pointer drag state.
///
/// Tracks whether a drag gesture is in progress. Only one gesture can be active at a
/// time; pressing while already dragging keeps the existing gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragSession {
    /// No button held
    #[default]
    Idle,
    /// Button held since `start` (canvas space)
    Dragging { mode: DragMode, start: Point },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    /// Index of the shape affected by the active drag, if any.
    pub fn active_index(&self) -> Option<usize> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { mode, .. } => Some(mode.index()),
        }
    }
}
