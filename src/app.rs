//! Frame-loop adapters for the two interactive programs.

use crate::draw::{Canvas, Color, RenderError};
use crate::input::{PointerKind, Step};
use crate::painter::{ColorPicker, Painter};
use crate::runtime::FrameApp;
use crate::scene::{Scene, ShapeId};
use crate::util::Point;
use log::{debug, warn};

/// The rectangle painter plus the color picker feeding it.
#[derive(Debug)]
pub struct PainterApp {
    pub painter: Painter,
    pub picker: ColorPicker,
}

impl PainterApp {
    pub fn new(painter: Painter, picker: ColorPicker) -> Self {
        Self { painter, picker }
    }
}

impl FrameApp for PainterApp {
    fn apply_step(&mut self, canvas: &mut Canvas, step: &Step) {
        match step {
            Step::Pick { color } => {
                if let Err(err) = self.picker.set_value(color) {
                    warn!("Ignoring color pick: {err}");
                }
            }
            Step::Scroll { dx, dy } => canvas.scroll_by(*dx, *dy),
            _ => {
                if let Some(event) = step.pointer_event() {
                    self.painter.handle_pointer(canvas, &event, &self.picker);
                }
            }
        }
    }

    fn render(&mut self, canvas: &Canvas) -> Result<(), RenderError> {
        self.painter.render(canvas)
    }
}

/// Result of one click delivered to the layered scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    /// Click position in client coordinates
    pub client: Point,
    /// Click position in canvas coordinates
    pub point: Point,
    /// Shape that received the click, if any
    pub target: Option<ShapeId>,
    /// Target kind and color right after its listeners ran
    pub target_state: Option<(&'static str, Color)>,
}

/// The layered scene, recording every click it routes.
pub struct LayersApp {
    pub scene: Scene,
    pub clicks: Vec<ClickOutcome>,
}

impl LayersApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            clicks: Vec::new(),
        }
    }
}

impl FrameApp for LayersApp {
    fn apply_step(&mut self, canvas: &mut Canvas, step: &Step) {
        match step {
            Step::Pick { .. } => debug!("Layered scene has no color picker; ignoring pick"),
            Step::Scroll { dx, dy } => canvas.scroll_by(*dx, *dy),
            _ => {
                let Some(event) = step.pointer_event() else {
                    return;
                };
                let target = self.scene.dispatch(canvas, &event);
                if event.kind == PointerKind::Click {
                    let target_state = target
                        .and_then(|id| self.scene.shape(id))
                        .map(|shape| (shape.kind(), shape.color()));
                    self.clicks.push(ClickOutcome {
                        client: event.client,
                        point: canvas.to_canvas(event.client),
                        target,
                        target_state,
                    });
                }
            }
        }
    }

    fn render(&mut self, canvas: &Canvas) -> Result<(), RenderError> {
        self.scene.render(canvas)
    }
}
