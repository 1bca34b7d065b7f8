//! Cairo-based rendering functions for whole scenes.

use super::canvas::{Canvas, RenderError};
use super::color::Color;
use super::shape::Shape;

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they are yielded (first shape = bottom layer), so
/// the last shape ends up on top.
pub fn render_shapes<'a, I>(ctx: &cairo::Context, shapes: I)
where
    I: IntoIterator<Item = &'a dyn Shape>,
{
    for shape in shapes {
        let _ = ctx.save();
        shape.draw(ctx);
        let _ = ctx.restore();
    }
}

/// Redraws a full frame: clears the canvas to `background` and paints every shape
/// in logical (device-pixel-scaled) coordinates.
pub fn render_frame<'a, I>(canvas: &Canvas, background: Color, shapes: I) -> Result<(), RenderError>
where
    I: IntoIterator<Item = &'a dyn Shape>,
{
    let ctx = canvas.scaled_context()?;
    canvas.clear(&ctx, background);
    render_shapes(&ctx, shapes);
    ctx.status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED, TRANSPARENT, WHITE};
    use crate::draw::shape::{Circle, Rectangle};
    use crate::util::Point;

    #[test]
    fn later_shapes_paint_over_earlier_ones() {
        let mut canvas = Canvas::new(20, 20, 1.0, Point::default()).unwrap();
        let bottom = Rectangle::new(0.0, 0.0, 20.0, 20.0, BLUE);
        let top = Rectangle::new(5.0, 5.0, 10.0, 10.0, RED);
        let shapes: Vec<&dyn Shape> = vec![&bottom, &top];

        render_frame(&canvas, WHITE, shapes).unwrap();

        assert_eq!(canvas.pixel(1, 1), Some([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(10, 10), Some([255, 0, 0, 255]));
    }

    #[test]
    fn frame_is_cleared_before_drawing() {
        let mut canvas = Canvas::new(20, 20, 1.0, Point::default()).unwrap();
        let circle = Circle::new(10.0, 10.0, 5.0, RED);
        render_frame(&canvas, TRANSPARENT, [&circle as &dyn Shape]).unwrap();
        assert_eq!(canvas.pixel(10, 10), Some([255, 0, 0, 255]));

        render_frame(&canvas, TRANSPARENT, std::iter::empty::<&dyn Shape>()).unwrap();
        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 0, 0]));
    }

    #[test]
    fn device_pixel_ratio_scales_geometry() {
        let mut canvas = Canvas::new(10, 10, 2.0, Point::default()).unwrap();
        let rect = Rectangle::new(5.0, 5.0, 5.0, 5.0, RED);
        render_frame(&canvas, WHITE, [&rect as &dyn Shape]).unwrap();

        assert_eq!(canvas.pixel(8, 8), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(12, 12), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(19, 19), Some([255, 0, 0, 255]));
    }
}
