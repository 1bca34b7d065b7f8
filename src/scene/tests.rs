use super::*;
use crate::draw::{BLUE, Circle, GREEN, RED, Rectangle, WHITE, YELLOW};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;

fn canvas_at(x: f64, y: f64) -> Canvas {
    Canvas::new(600, 400, 1.0, Point::new(x, y)).unwrap()
}

fn recorder(scene: &mut Scene, id: ShapeId, name: &str) -> Rc<RefCell<Vec<ShapeEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    scene.on(id, name, move |_, event: &ShapeEvent| {
        sink.borrow_mut().push(event.clone());
        Ok(())
    });
    seen
}

#[test]
fn add_shape_appends_on_top() {
    let mut scene = Scene::new();
    let a = scene.add_shape(Rectangle::new(0.0, 0.0, 10.0, 10.0, BLUE));
    let b = scene.add_shape(Circle::new(5.0, 5.0, 3.0, RED));

    assert_eq!(scene.len(), 2);
    assert!(a < b);
    assert_eq!(b.index(), 1);
    let kinds: Vec<_> = scene.shapes().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec!["rectangle", "circle"]);
}

#[test]
fn hit_test_prefers_the_last_added_shape() {
    let mut scene = Scene::new();
    let first = scene.add_shape(Rectangle::new(50.0, 50.0, 150.0, 100.0, BLUE));
    let second = scene.add_shape(Rectangle::new(80.0, 80.0, 100.0, 100.0, GREEN));

    assert_eq!(scene.hit_test(Point::new(100.0, 100.0)), Some(second));
    assert_eq!(scene.hit_test(Point::new(60.0, 60.0)), Some(first));
    assert_eq!(scene.hit_test(Point::new(170.0, 170.0)), Some(second));
    assert_eq!(scene.hit_test(Point::new(10.0, 10.0)), None);
}

#[test]
fn click_is_emitted_on_the_topmost_shape_only() {
    let mut scene = Scene::new();
    let bottom = scene.add_shape(Rectangle::new(50.0, 50.0, 150.0, 100.0, BLUE));
    let top = scene.add_shape(Rectangle::new(80.0, 80.0, 100.0, 100.0, GREEN));
    let bottom_clicks = recorder(&mut scene, bottom, CLICK);
    let top_clicks = recorder(&mut scene, top, CLICK);

    let canvas = canvas_at(0.0, 0.0);
    let hit = scene.handle_click(&canvas, &PointerEvent::click(100.0, 100.0));

    assert_eq!(hit, Some(top));
    assert!(bottom_clicks.borrow().is_empty());
    let events = top_clicks.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, CLICK);
    assert_eq!(events[0].target, top);
    assert_eq!(events[0].point, Point::new(100.0, 100.0));
    assert_eq!(events[0].native.client, Point::new(100.0, 100.0));
}

#[test]
fn click_on_empty_canvas_is_a_no_op() {
    let mut scene = Scene::new();
    let id = scene.add_shape(Rectangle::new(50.0, 50.0, 10.0, 10.0, BLUE));
    let clicks = recorder(&mut scene, id, CLICK);
    let canvas = canvas_at(0.0, 0.0);

    assert_eq!(
        scene.handle_click(&canvas, &PointerEvent::click(5.0, 5.0)),
        None
    );
    assert!(clicks.borrow().is_empty());
    assert_eq!(scene.shape(id).unwrap().color(), BLUE);
}

#[test]
fn listeners_can_recolor_their_target() {
    let mut scene = Scene::new();
    let id = scene.add_shape(Rectangle::new(0.0, 0.0, 10.0, 10.0, BLUE));
    scene.on(id, CLICK, |shape, _| {
        shape.set_color(YELLOW);
        Ok(())
    });
    let canvas = canvas_at(0.0, 0.0);

    scene.handle_click(&canvas, &PointerEvent::click(5.0, 5.0));

    assert_eq!(scene.shape(id).unwrap().color(), YELLOW);
}

#[test]
fn click_without_listeners_still_reports_the_target() {
    let mut scene = Scene::new();
    let id = scene.add_shape(Rectangle::new(0.0, 0.0, 10.0, 10.0, BLUE));
    let canvas = canvas_at(0.0, 0.0);

    assert_eq!(
        scene.handle_click(&canvas, &PointerEvent::click(5.0, 5.0)),
        Some(id)
    );
    assert_eq!(
        scene.emit(id, CLICK, Point::new(5.0, 5.0), PointerEvent::click(5.0, 5.0)),
        DispatchReport::default()
    );
    assert_eq!(scene.shape(id).unwrap().color(), BLUE);
}

#[test]
fn client_coordinates_use_the_current_canvas_offset() {
    let mut scene = Scene::new();
    let id = scene.add_shape(Rectangle::new(0.0, 0.0, 20.0, 20.0, BLUE));
    let mut canvas = canvas_at(100.0, 100.0);

    assert_eq!(
        scene.handle_click(&canvas, &PointerEvent::click(110.0, 110.0)),
        Some(id)
    );

    // The page scrolls down: the same client position is now below the shape.
    canvas.scroll_by(0.0, 50.0);
    assert_eq!(
        scene.handle_click(&canvas, &PointerEvent::click(110.0, 110.0)),
        None
    );
    assert_eq!(
        scene.handle_click(&canvas, &PointerEvent::click(110.0, 60.0)),
        Some(id)
    );
}

#[test]
fn failing_listener_is_isolated() {
    let mut scene = Scene::new();
    let id = scene.add_shape(Rectangle::new(0.0, 0.0, 10.0, 10.0, BLUE));
    scene.on(id, CLICK, |_, _| Err(anyhow!("listener exploded")));
    scene.on(id, CLICK, |shape, _| {
        shape.set_color(RED);
        Ok(())
    });

    let canvas = canvas_at(0.0, 0.0);
    scene.handle_click(&canvas, &PointerEvent::click(1.0, 1.0));

    assert_eq!(scene.shape(id).unwrap().color(), RED);
}

#[test]
fn dispatch_routes_pointer_kinds_by_name() {
    let mut scene = Scene::new();
    let id = scene.add_shape(Circle::new(50.0, 50.0, 10.0, RED));
    let downs = recorder(&mut scene, id, "pointerdown");
    let moves = recorder(&mut scene, id, "pointermove");
    let clicks = recorder(&mut scene, id, CLICK);
    let canvas = canvas_at(0.0, 0.0);

    scene.dispatch(&canvas, &PointerEvent::down(50.0, 50.0));
    scene.dispatch(&canvas, &PointerEvent::moved(55.0, 50.0));
    scene.dispatch(&canvas, &PointerEvent::moved(90.0, 90.0));
    scene.dispatch(&canvas, &PointerEvent::click(50.0, 45.0));

    assert_eq!(downs.borrow().len(), 1);
    assert_eq!(moves.borrow().len(), 1);
    assert_eq!(moves.borrow()[0].name, "pointermove");
    assert_eq!(clicks.borrow().len(), 1);
    assert_eq!(scene.listener_count(id, CLICK), 1);
}

#[test]
fn on_rejects_foreign_ids() {
    let mut other = Scene::new();
    other.add_shape(Rectangle::new(0.0, 0.0, 1.0, 1.0, BLUE));
    let foreign = other.add_shape(Rectangle::new(0.0, 0.0, 1.0, 1.0, BLUE));

    let mut scene = Scene::new();
    assert!(!scene.on(foreign, CLICK, |_, _| Ok(())));
    assert!(scene.shape(foreign).is_none());
}

#[test]
fn render_paints_in_insertion_order() {
    let mut scene = Scene::with_background(WHITE);
    scene.add_shape(Rectangle::new(0.0, 0.0, 40.0, 40.0, BLUE));
    scene.add_shape(Rectangle::new(10.0, 10.0, 20.0, 20.0, RED));
    let mut canvas = Canvas::new(50, 50, 1.0, Point::default()).unwrap();

    scene.render(&canvas).unwrap();

    assert_eq!(canvas.pixel(5, 5), Some([0, 0, 255, 255]));
    assert_eq!(canvas.pixel(20, 20), Some([255, 0, 0, 255]));
    assert_eq!(canvas.pixel(45, 45), Some([255, 255, 255, 255]));
}
