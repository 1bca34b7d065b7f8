//! Shape definitions: the drawable, hit-testable primitives placed on a canvas.

use super::color::{Color, WHITE};
use crate::util::{Bounds, Point};
use std::f64::consts::PI;
use std::fmt;

/// Capability set every drawable primitive provides.
///
/// A shape knows how to paint itself with its current geometry and color, and how to
/// answer whether a canvas-space point lies within its region. Containers such as
/// [`crate::scene::Scene`] and [`crate::painter::Painter`] only talk to shapes
/// through this trait.
pub trait Shape: fmt::Debug {
    /// Short lowercase name of the shape type ("rectangle", "circle", ...).
    fn kind(&self) -> &'static str;

    /// Paints the shape onto `ctx` using its current geometry and color.
    fn draw(&self, ctx: &cairo::Context);

    /// Returns whether `point` (canvas space) lies within the shape's region.
    fn is_point_inside(&self, point: Point) -> bool;

    /// Axis-aligned box enclosing the shape.
    fn bounds(&self) -> Bounds;

    /// Current fill color.
    fn color(&self) -> Color;

    /// Replaces the fill color.
    fn set_color(&mut self, color: Color);

    /// Moves the whole shape by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);
}

/// Filled rectangle anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Top-left corner
    pub origin: Point,
    /// Width in canvas units (never negative)
    pub width: f64,
    /// Height in canvas units (never negative)
    pub height: f64,
    /// Fill color
    pub color: Color,
}

impl Rectangle {
    /// Creates a rectangle, normalizing negative sizes so the origin stays the
    /// top-left corner.
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        let bounds = Bounds::from_origin_size(Point::new(x, y), width, height);
        Self {
            origin: Point::new(bounds.min_x, bounds.min_y),
            width: bounds.width(),
            height: bounds.height(),
            color,
        }
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn draw(&self, ctx: &cairo::Context) {
        self.color.apply(ctx);
        ctx.rectangle(self.origin.x, self.origin.y, self.width, self.height);
        let _ = ctx.fill();
    }

    fn is_point_inside(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.origin, self.width, self.height)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.offset(dx, dy);
    }
}

/// Filled circle anchored at its center.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    /// Center point
    pub center: Point,
    /// Radius in canvas units (never negative)
    pub radius: f64,
    /// Fill color
    pub color: Color,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self {
            center: Point::new(x, y),
            radius: radius.abs(),
            color,
        }
    }
}

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn draw(&self, ctx: &cairo::Context) {
        if self.radius == 0.0 {
            return;
        }
        self.color.apply(ctx);
        ctx.new_path();
        ctx.arc(self.center.x, self.center.y, self.radius, 0.0, PI * 2.0);
        let _ = ctx.fill();
    }

    fn is_point_inside(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.center.x - self.radius,
            min_y: self.center.y - self.radius,
            max_x: self.center.x + self.radius,
            max_y: self.center.y + self.radius,
        }
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.offset(dx, dy);
    }
}

/// Rectangle defined by two free corners, as produced by a drag gesture.
///
/// `start` is where the pointer was pressed and `end` follows the pointer, so either
/// corner may be the top-left one. All geometry goes through the normalized
/// [`PaintedRect::min`]/[`PaintedRect::max`] accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintedRect {
    /// Corner where the drag started
    pub start: Point,
    /// Opposite corner, following the pointer while the rectangle is created
    pub end: Point,
    /// Fill color
    pub color: Color,
    /// Border color
    pub border_color: Color,
    /// Border width in canvas units (0 disables the border)
    pub border_width: f64,
}

impl PaintedRect {
    /// Creates a zero-sized rectangle at `start` with a white 3-unit border.
    pub fn new(start: Point, color: Color) -> Self {
        Self {
            start,
            end: start,
            color,
            border_color: WHITE,
            border_width: 3.0,
        }
    }

    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = color;
        self.border_width = width.max(0.0);
        self
    }

    /// Top-left corner after normalization.
    pub fn min(&self) -> Point {
        Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    /// Bottom-right corner after normalization.
    pub fn max(&self) -> Point {
        Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y))
    }
}

impl Shape for PaintedRect {
    fn kind(&self) -> &'static str {
        "painted-rect"
    }

    fn draw(&self, ctx: &cairo::Context) {
        let bounds = self.bounds();

        self.color.apply(ctx);
        ctx.rectangle(bounds.min_x, bounds.min_y, bounds.width(), bounds.height());
        let _ = ctx.fill();

        if self.border_width > 0.0 {
            self.border_color.apply(ctx);
            ctx.set_line_width(self.border_width);
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.rectangle(bounds.min_x, bounds.min_y, bounds.width(), bounds.height());
            let _ = ctx.stroke();
        }
    }

    fn is_point_inside(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.start, self.end)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
    }
}
