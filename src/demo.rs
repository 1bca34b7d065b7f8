//! The sample layered scene: two overlapping rectangles and a circle that recolor
//! themselves when clicked.

use crate::draw::{BLUE, Circle, Color, GREEN, LIGHT_GREEN, RED, Rectangle, YELLOW};
use crate::scene::{CLICK, Scene, ShapeId};
use crate::util;
use log::info;

/// Ids of the shapes created by [`layers_scene`], bottom to top.
#[derive(Debug, Clone, Copy)]
pub struct LayersDemo {
    pub blue_rect: ShapeId,
    pub circle: ShapeId,
    pub overlapping_rect: ShapeId,
}

/// Builds the demo scene.
///
/// Insertion order decides stacking: the green rectangle is added last, so it sits on
/// top of the blue rectangle where the two overlap (80..150 on both axes).
pub fn layers_scene(background: Color) -> (Scene, LayersDemo) {
    let mut scene = Scene::with_background(background);

    let blue_rect = scene.add_shape(Rectangle::new(50.0, 50.0, 150.0, 100.0, BLUE));
    let circle = scene.add_shape(Circle::new(250.0, 200.0, 50.0, RED));
    let overlapping_rect = scene.add_shape(Rectangle::new(80.0, 80.0, 100.0, 100.0, GREEN));

    recolor_on_click(&mut scene, blue_rect, "blue rectangle", RED);
    recolor_on_click(&mut scene, overlapping_rect, "green rectangle", YELLOW);
    recolor_on_click(&mut scene, circle, "red circle", LIGHT_GREEN);

    (
        scene,
        LayersDemo {
            blue_rect,
            circle,
            overlapping_rect,
        },
    )
}

fn recolor_on_click(scene: &mut Scene, id: ShapeId, label: &'static str, color: Color) {
    scene.on(id, CLICK, move |shape, event| {
        info!(
            "{label} clicked at ({:.0}, {:.0}); now {}",
            event.point.x,
            event.point.y,
            util::color_to_name(&color)
        );
        shape.set_color(color);
        Ok(())
    });
}
