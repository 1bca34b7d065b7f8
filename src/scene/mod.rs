//! Layered scene: ordered shapes with per-shape event listeners.
//!
//! The scene owns its shapes in insertion order. Insertion order is z-order: index 0
//! is painted first (bottom), the last shape is painted last and hit-tested first.
//! Pointer events are routed to the single topmost shape under the pointer; there
//! is no bubbling to shapes below it.

use crate::draw::{Canvas, Color, RenderError, Shape, TRANSPARENT, render_frame};
use crate::event::{DispatchReport, EventEmitter};
use crate::input::{PointerEvent, PointerKind};
use crate::util::Point;
use log::debug;

#[cfg(test)]
mod tests;

/// Name of the event emitted when a shape is clicked.
pub const CLICK: &str = "click";

/// Stable handle to a shape in a [`Scene`]. Shapes are never removed, so ids stay
/// valid for the lifetime of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    /// Position in paint order (0 = bottom).
    pub fn index(self) -> usize {
        self.0
    }
}

/// Payload delivered to shape listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEvent {
    /// Event name ("click", "pointerdown", ...)
    pub name: String,
    /// Shape the event was emitted on
    pub target: ShapeId,
    /// Pointer position in canvas space
    pub point: Point,
    /// The raw pointer event, in client space
    pub native: PointerEvent,
}

/// Listener signature for shape events: the target shape plus the event payload.
pub type ShapeEvents = EventEmitter<dyn Shape, ShapeEvent>;

struct Node {
    shape: Box<dyn Shape>,
    events: ShapeEvents,
}

/// Container for all shapes of the layered scene.
pub struct Scene {
    nodes: Vec<Node>,
    background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene with a transparent background.
    pub fn new() -> Self {
        Self::with_background(TRANSPARENT)
    }

    pub fn with_background(background: Color) -> Self {
        Self {
            nodes: Vec::new(),
            background,
        }
    }

    /// Adds a shape on top of all existing shapes.
    pub fn add_shape(&mut self, shape: impl Shape + 'static) -> ShapeId {
        self.add_boxed(Box::new(shape))
    }

    /// Adds an already boxed shape on top of all existing shapes.
    pub fn add_boxed(&mut self, shape: Box<dyn Shape>) -> ShapeId {
        let id = ShapeId(self.nodes.len());
        debug!("Added {} as shape #{}", shape.kind(), id.0);
        self.nodes.push(Node {
            shape,
            events: ShapeEvents::new(),
        });
        id
    }

    /// Subscribes `listener` to `name` events on shape `id`.
    ///
    /// Returns `false` if `id` does not belong to this scene.
    pub fn on<F>(&mut self, id: ShapeId, name: impl Into<String>, listener: F) -> bool
    where
        F: FnMut(&mut (dyn Shape + 'static), &ShapeEvent) -> anyhow::Result<()> + 'static,
    {
        match self.nodes.get_mut(id.0) {
            Some(node) => {
                node.events.on(name, listener);
                true
            }
            None => false,
        }
    }

    /// Emits `name` on shape `id` only. Listeners may mutate the shape.
    pub fn emit(
        &mut self,
        id: ShapeId,
        name: &str,
        point: Point,
        native: PointerEvent,
    ) -> DispatchReport {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return DispatchReport::default();
        };

        let event = ShapeEvent {
            name: name.to_string(),
            target: id,
            point,
            native,
        };
        let report = node.events.emit(name, node.shape.as_mut(), &event);
        if !report.handled() {
            debug!("Shape #{} has no '{name}' listeners", id.0);
        }
        report
    }

    pub fn shape(&self, id: ShapeId) -> Option<&dyn Shape> {
        self.nodes.get(id.0).map(|node| node.shape.as_ref())
    }

    /// Shapes in paint order (bottom first).
    pub fn shapes(&self) -> impl Iterator<Item = &dyn Shape> {
        self.nodes.iter().map(|node| node.shape.as_ref())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the topmost shape containing `point` (canvas space).
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.nodes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, node)| node.shape.is_point_inside(point))
            .map(|(index, _)| ShapeId(index))
    }

    /// Clears the canvas and paints every shape in insertion order.
    pub fn render(&self, canvas: &Canvas) -> Result<(), RenderError> {
        render_frame(canvas, self.background, self.shapes())
    }

    /// Routes a click to the topmost shape under the pointer.
    ///
    /// The client position is converted with the canvas offset as it is right now.
    /// Returns the clicked shape, or `None` when the click landed on empty canvas.
    pub fn handle_click(&mut self, canvas: &Canvas, event: &PointerEvent) -> Option<ShapeId> {
        let point = canvas.to_canvas(event.client);
        let target = self.hit_test(point)?;

        debug!(
            "Click at ({:.1}, {:.1}) hit shape #{}",
            point.x, point.y, target.0
        );
        self.emit(target, CLICK, point, *event);
        Some(target)
    }

    /// Routes any pointer event to the topmost shape under the pointer, emitting it
    /// under [`PointerKind::event_name`].
    pub fn dispatch(&mut self, canvas: &Canvas, event: &PointerEvent) -> Option<ShapeId> {
        if event.kind == PointerKind::Click {
            return self.handle_click(canvas, event);
        }

        let point = canvas.to_canvas(event.client);
        let target = self.hit_test(point)?;
        self.emit(target, event.kind.event_name(), point, *event);
        Some(target)
    }

    /// Number of listeners registered for `name` on shape `id`.
    pub fn listener_count(&self, id: ShapeId, name: &str) -> usize {
        self.nodes
            .get(id.0)
            .map_or(0, |node| node.events.listener_count(name))
    }
}
