//! Click-and-drag rectangle painter.
//!
//! Pressing on empty canvas creates a rectangle whose far corner follows the pointer
//! until release. Pressing on an existing rectangle drags it: every motion moves the
//! rectangle by the offset between the press point and the current pointer position,
//! applied to the snapshot taken at press time, so intermediate motions never
//! accumulate error.

mod picker;
mod session;

pub use picker::{ColorPicker, ColorSource};
pub use session::{DragMode, DragSession};

use crate::draw::{Canvas, Color, PaintedRect, RenderError, Shape, TRANSPARENT, WHITE, render_frame};
use crate::input::{MouseButton, PointerEvent, PointerKind};
use crate::util::Point;
use log::{debug, warn};

/// Appearance and limits applied to newly painted rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    /// Canvas clear color
    pub background: Color,
    /// Border color of every rectangle
    pub border_color: Color,
    /// Border width in logical units
    pub border_width: f64,
    /// Maximum number of rectangles (0 = unlimited)
    pub max_shapes: usize,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            background: TRANSPARENT,
            border_color: WHITE,
            border_width: 3.0,
            max_shapes: 0,
        }
    }
}

/// Painter state: the painted rectangles plus the active drag, if any.
#[derive(Debug, Default)]
pub struct Painter {
    /// Rectangles in paint order (first = bottom layer, last = top layer)
    pub shapes: Vec<PaintedRect>,
    /// Current drag state machine
    pub session: DragSession,
    /// Appearance and limits
    pub style: PaintStyle,
}

impl Painter {
    pub fn new(style: PaintStyle) -> Self {
        Self {
            shapes: Vec::new(),
            session: DragSession::Idle,
            style,
        }
    }

    /// Index of the topmost rectangle containing `point`.
    pub fn shape_at(&self, point: Point) -> Option<usize> {
        self.shapes
            .iter()
            .rposition(|shape| shape.is_point_inside(point))
    }

    /// Processes a button press at `point` (canvas space).
    ///
    /// # Behavior
    /// - Non-primary buttons and presses during an active drag are ignored
    /// - On a rectangle: starts moving the topmost one under the pointer
    /// - On empty canvas: adds a new rectangle with the color from `colors` and
    ///   starts growing it
    pub fn on_pointer_down(&mut self, button: MouseButton, point: Point, colors: &dyn ColorSource) {
        if button != MouseButton::Left || !self.session.is_idle() {
            return;
        }

        if let Some(index) = self.shape_at(point) {
            debug!("Moving rectangle #{index} from ({:.1}, {:.1})", point.x, point.y);
            self.session = DragSession::Dragging {
                mode: DragMode::Move {
                    index,
                    snapshot: self.shapes[index].clone(),
                },
                start: point,
            };
            return;
        }

        if self.style.max_shapes > 0 && self.shapes.len() >= self.style.max_shapes {
            warn!(
                "Shape limit ({}) reached; ignoring new rectangle",
                self.style.max_shapes
            );
            return;
        }

        let rect = PaintedRect::new(point, colors.current_color())
            .with_border(self.style.border_color, self.style.border_width);
        self.shapes.push(rect);
        let index = self.shapes.len() - 1;
        debug!("Creating rectangle #{index} at ({:.1}, {:.1})", point.x, point.y);

        self.session = DragSession::Dragging {
            mode: DragMode::Create { index },
            start: point,
        };
    }

    /// Processes pointer motion to `point` (canvas space). Ignored while idle.
    pub fn on_pointer_move(&mut self, point: Point) {
        let DragSession::Dragging { mode, start } = &self.session else {
            return;
        };

        match mode {
            DragMode::Create { index } => {
                if let Some(rect) = self.shapes.get_mut(*index) {
                    rect.end = point;
                }
            }
            DragMode::Move { index, snapshot } => {
                let (dx, dy) = point.delta_from(*start);
                if let Some(rect) = self.shapes.get_mut(*index) {
                    rect.start = snapshot.start.offset(dx, dy);
                    rect.end = snapshot.end.offset(dx, dy);
                }
            }
        }
    }

    /// Processes a button release: ends any drag, whatever the button or position.
    pub fn on_pointer_up(&mut self, _button: MouseButton, _point: Point) {
        if let Some(index) = self.session.active_index() {
            debug!("Drag of rectangle #{index} finished");
        }
        self.session = DragSession::Idle;
    }

    /// Converts a client-space event with the canvas' current offset and routes it.
    pub fn handle_pointer(
        &mut self,
        canvas: &Canvas,
        event: &PointerEvent,
        colors: &dyn ColorSource,
    ) {
        let point = canvas.to_canvas(event.client);
        match event.kind {
            PointerKind::Down => self.on_pointer_down(event.button, point, colors),
            PointerKind::Move => self.on_pointer_move(point),
            PointerKind::Up => self.on_pointer_up(event.button, point),
            PointerKind::Click => {}
        }
    }

    /// Clears the canvas and redraws every rectangle, scaled by the canvas'
    /// device-pixel ratio.
    pub fn render(&self, canvas: &Canvas) -> Result<(), RenderError> {
        render_frame(
            canvas,
            self.style.background,
            self.shapes.iter().map(|shape| shape as &dyn Shape),
        )
    }
}
