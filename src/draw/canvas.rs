//! Raster drawing surface with screen placement and device-pixel scaling.

use super::color::Color;
use crate::util::{Bounds, Point};
use cairo::{Context, Format, ImageSurface};
use log::{debug, info};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while creating, drawing to, or exporting a [`Canvas`].
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} drawing surface: {source}")]
    Surface {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },

    #[error("failed to create drawing context: {0}")]
    Context(#[from] cairo::Error),

    #[error("failed to create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),
}

/// The drawing surface shapes are painted onto.
///
/// A canvas has a logical size (what pointer coordinates refer to), a device-pixel
/// ratio that scales the backing surface, and an on-screen offset describing where
/// its top-left corner sits in client coordinates. The offset is read every time a
/// pointer event is converted, so moving the canvas never leaves stale hit tests.
pub struct Canvas {
    surface: ImageSurface,
    width: u32,
    height: u32,
    device_pixel_ratio: f64,
    offset: Point,
}

impl Canvas {
    /// Creates a canvas of `width` x `height` logical units, backed by a surface of
    /// `ceil(width * dpr)` x `ceil(height * dpr)` pixels.
    pub fn new(
        width: u32,
        height: u32,
        device_pixel_ratio: f64,
        offset: Point,
    ) -> Result<Self, RenderError> {
        let device_pixel_ratio = if device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let pixel_width = (width as f64 * device_pixel_ratio).ceil() as i32;
        let pixel_height = (height as f64 * device_pixel_ratio).ceil() as i32;

        let surface = ImageSurface::create(Format::ARgb32, pixel_width, pixel_height).map_err(
            |source| RenderError::Surface {
                width: pixel_width,
                height: pixel_height,
                source,
            },
        )?;

        debug!(
            "Created canvas {}x{} (dpr {:.2}, {}x{} px) at ({:.1}, {:.1})",
            width, height, device_pixel_ratio, pixel_width, pixel_height, offset.x, offset.y
        );

        Ok(Self {
            surface,
            width,
            height,
            device_pixel_ratio,
            offset,
        })
    }

    /// Logical width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Current on-screen position of the canvas' top-left corner.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Moves the canvas on screen (layout change).
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Scrolls the page by `(dx, dy)`, which moves the canvas the opposite way in
    /// client coordinates.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.offset = self.offset.offset(-dx, -dy);
        debug!(
            "Canvas scrolled; offset now ({:.1}, {:.1})",
            self.offset.x, self.offset.y
        );
    }

    /// Client-space rectangle currently covered by the canvas.
    pub fn bounding_client_rect(&self) -> Bounds {
        Bounds::from_origin_size(self.offset, self.width as f64, self.height as f64)
    }

    /// Converts a client-space position into canvas space using the current offset.
    pub fn to_canvas(&self, client: Point) -> Point {
        let rect = self.bounding_client_rect();
        Point::new(client.x - rect.min_x, client.y - rect.min_y)
    }

    /// Creates a drawing context for the backing surface, unscaled.
    pub fn context(&self) -> Result<Context, RenderError> {
        Ok(Context::new(&self.surface)?)
    }

    /// Creates a drawing context scaled by the device-pixel ratio, so callers can
    /// draw in logical units.
    pub fn scaled_context(&self) -> Result<Context, RenderError> {
        let ctx = self.context()?;
        ctx.scale(self.device_pixel_ratio, self.device_pixel_ratio);
        Ok(ctx)
    }

    /// Clears the whole surface to `background`.
    pub fn clear(&self, ctx: &Context, background: Color) {
        let _ = ctx.save();
        ctx.set_operator(cairo::Operator::Source);
        background.apply(ctx);
        let _ = ctx.paint();
        let _ = ctx.restore();
    }

    /// Reads one device pixel as straight (non-premultiplied) `[r, g, b, a]`.
    ///
    /// Returns `None` when the coordinate is off the surface or the surface is still
    /// borrowed by a live drawing context.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.surface.width() || y >= self.surface.height() {
            return None;
        }
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let word = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);

        let a = (word >> 24) as u8;
        let unpremultiply = |c: u32| -> u8 {
            if a == 0 {
                0
            } else {
                ((c & 0xff) * 255 / a as u32) as u8
            }
        };
        Some([
            unpremultiply(word >> 16),
            unpremultiply(word >> 8),
            unpremultiply(word),
            a,
        ])
    }

    /// Writes the current surface contents to a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        self.surface.flush();
        let mut file = File::create(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.surface.write_to_png(&mut file)?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, TRANSPARENT};

    #[test]
    fn backing_surface_scales_with_device_pixel_ratio() {
        let mut canvas = Canvas::new(100, 50, 2.0, Point::default()).unwrap();
        assert_eq!(canvas.width(), 100);
        assert!(canvas.pixel(199, 99).is_some());
        assert!(canvas.pixel(200, 99).is_none());
    }

    #[test]
    fn non_positive_ratio_falls_back_to_one() {
        let canvas = Canvas::new(10, 10, 0.0, Point::default()).unwrap();
        assert_eq!(canvas.device_pixel_ratio(), 1.0);
    }

    #[test]
    fn client_points_are_converted_with_the_current_offset() {
        let mut canvas = Canvas::new(600, 400, 1.0, Point::new(8.0, 30.0)).unwrap();
        assert_eq!(
            canvas.to_canvas(Point::new(108.0, 130.0)),
            Point::new(100.0, 100.0)
        );

        canvas.scroll_by(0.0, 20.0);
        assert_eq!(canvas.offset(), Point::new(8.0, 10.0));
        assert_eq!(
            canvas.to_canvas(Point::new(108.0, 130.0)),
            Point::new(100.0, 120.0)
        );

        canvas.set_offset(Point::new(0.0, 0.0));
        assert_eq!(
            canvas.to_canvas(Point::new(108.0, 130.0)),
            Point::new(108.0, 130.0)
        );
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut canvas = Canvas::new(4, 4, 1.0, Point::default()).unwrap();
        {
            let ctx = canvas.context().unwrap();
            canvas.clear(&ctx, BLUE);
        }
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 255, 255]));

        {
            let ctx = canvas.context().unwrap();
            canvas.clear(&ctx, TRANSPARENT);
        }
        assert_eq!(canvas.pixel(2, 2), Some([0, 0, 0, 0]));
    }
}
