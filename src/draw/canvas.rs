//! Cairo-backed canvas that keeps every frame's drawing.
//!
//! All coordinates here are canvas pixels: sketch transforms are applied by the
//! renderer before calling in, and widgets draw straight onto the canvas.

use super::color::Color;
use super::font::FontDescriptor;
use super::pixels::PixelBuffer;
use crate::error::Result;
use std::fs::File;
use std::path::Path;

/// Persistent ARGB image surface the sketch draws into.
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Creates a fully transparent canvas of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Short-lived context; dropped before pixel access so the surface stays borrowable.
    fn context(&self) -> Result<cairo::Context> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// Fills the whole canvas with an opaque color.
    pub fn paint(&self, color: Color) -> Result<()> {
        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Source);
        color.set_source(&ctx);
        ctx.paint()?;
        Ok(())
    }

    /// Strokes a polyline, optionally joining the last point back to the first.
    pub fn polyline(
        &self,
        points: &[(f64, f64)],
        closed: bool,
        color: Color,
        weight: f64,
        antialias: bool,
    ) -> Result<()> {
        if points.len() < 2 || weight <= 0.0 {
            return Ok(());
        }

        let ctx = self.context()?;
        ctx.set_antialias(if antialias {
            cairo::Antialias::Best
        } else {
            cairo::Antialias::None
        });
        ctx.set_line_width(weight);
        ctx.set_line_join(cairo::LineJoin::Miter);
        color.set_source(&ctx);

        trace_path(&ctx, points);
        if closed {
            ctx.close_path();
        }
        ctx.stroke()?;
        Ok(())
    }

    /// Fills and/or outlines a closed polygon.
    pub fn polygon(
        &self,
        points: &[(f64, f64)],
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
    ) -> Result<()> {
        if points.len() < 2 {
            return Ok(());
        }

        let ctx = self.context()?;
        if let Some(color) = fill {
            trace_path(&ctx, points);
            ctx.close_path();
            color.set_source(&ctx);
            ctx.fill()?;
        }
        if let Some((color, weight)) = stroke.filter(|(_, w)| *w > 0.0) {
            trace_path(&ctx, points);
            ctx.close_path();
            color.set_source(&ctx);
            ctx.set_line_width(weight);
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.stroke()?;
        }
        Ok(())
    }

    /// Fills and/or outlines the ellipse inscribed in the given bounding box.
    pub fn ellipse(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
    ) -> Result<()> {
        if width <= 0.0 || height <= 0.0 {
            return Ok(());
        }

        let ctx = self.context()?;
        let trace = |ctx: &cairo::Context| -> Result<()> {
            ctx.save()?;
            ctx.translate(x + width / 2.0, y + height / 2.0);
            ctx.scale(width / 2.0, height / 2.0);
            ctx.new_path();
            ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
            ctx.restore()?;
            Ok(())
        };

        if let Some(color) = fill {
            trace(&ctx)?;
            color.set_source(&ctx);
            ctx.fill()?;
        }
        if let Some((color, weight)) = stroke.filter(|(_, w)| *w > 0.0) {
            trace(&ctx)?;
            color.set_source(&ctx);
            ctx.set_line_width(weight);
            ctx.stroke()?;
        }
        Ok(())
    }

    /// Fills and/or outlines a circle.
    pub fn circle(
        &self,
        center: (f64, f64),
        radius: f64,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
    ) -> Result<()> {
        let (cx, cy) = center;
        self.ellipse(
            cx - radius,
            cy - radius,
            radius * 2.0,
            radius * 2.0,
            fill,
            stroke,
        )
    }

    /// Renders a single line of text with its top-left corner at (x, y).
    pub fn text(
        &self,
        x: f64,
        y: f64,
        text: &str,
        color: Color,
        size: f64,
        font: &FontDescriptor,
    ) -> Result<()> {
        let ctx = self.context()?;
        let layout = text_layout(&ctx, text, size, font);
        color.set_source(&ctx);
        ctx.move_to(x, y);
        pangocairo::functions::show_layout(&ctx, &layout);
        Ok(())
    }

    /// Pixel size (width, height) the given text would occupy.
    pub fn text_extent(&self, text: &str, size: f64, font: &FontDescriptor) -> Result<(f64, f64)> {
        let ctx = self.context()?;
        let layout = text_layout(&ctx, text, size, font);
        let (w, h) = layout.pixel_size();
        Ok((w as f64, h as f64))
    }

    /// Redraws what is already on the canvas rotated (counterclockwise for a
    /// positive angle) and scaled about the canvas center, over the current content.
    pub fn transform_display(&self, angle: f64, factor: f64) -> Result<()> {
        if factor <= 0.0 {
            return Ok(());
        }

        let snapshot =
            cairo::ImageSurface::create(cairo::Format::ARgb32, self.width, self.height)?;
        {
            let copy = cairo::Context::new(&snapshot)?;
            copy.set_source_surface(&self.surface, 0.0, 0.0)?;
            copy.paint()?;
        }

        let (cx, cy) = (self.width as f64 / 2.0, self.height as f64 / 2.0);
        let ctx = self.context()?;
        ctx.translate(cx, cy);
        ctx.rotate(-angle);
        ctx.scale(factor, factor);
        ctx.translate(-cx, -cy);
        ctx.set_source_surface(&snapshot, 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// Paints the canvas onto another context at the origin.
    pub fn paint_onto(&self, ctx: &cairo::Context) -> Result<()> {
        ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// Reads one pixel, un-premultiplying alpha. `None` outside the canvas.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let i = y as usize * stride + x as usize * 4;
        let [b, g, r, a] = [data[i], data[i + 1], data[i + 2], data[i + 3]];
        if a == 0 {
            return Some(Color::new(0.0, 0.0, 0.0, 0.0));
        }
        let alpha = a as f64 / 255.0;
        Some(Color::new(
            r as f64 / 255.0 / alpha,
            g as f64 / 255.0 / alpha,
            b as f64 / 255.0 / alpha,
            alpha,
        ))
    }

    /// Copies the canvas into an RGB pixel buffer.
    pub fn read_pixels(&mut self) -> Result<PixelBuffer> {
        self.surface.flush();
        let (width, height) = (self.width as usize, self.height as usize);
        let stride = self.surface.stride() as usize;
        let data = self
            .surface
            .data()
            .map_err(|_| cairo::Error::SurfaceFinished)?;

        let mut buffer = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let i = y * stride + x * 4;
                buffer.set(x, y, (data[i + 2], data[i + 1], data[i]));
            }
        }
        Ok(buffer)
    }

    /// Writes an RGB pixel buffer back as opaque pixels.
    ///
    /// Buffers of a different size are clipped to the canvas.
    pub fn write_pixels(&mut self, buffer: &PixelBuffer) -> Result<()> {
        self.surface.flush();
        let width = buffer.width().min(self.width as usize);
        let height = buffer.height().min(self.height as usize);
        let stride = self.surface.stride() as usize;
        let mut data = self
            .surface
            .data()
            .map_err(|_| cairo::Error::SurfaceFinished)?;

        for y in 0..height {
            for x in 0..width {
                if let Some((r, g, b)) = buffer.get(x, y) {
                    let i = y * stride + x * 4;
                    data[i] = b;
                    data[i + 1] = g;
                    data[i + 2] = r;
                    data[i + 3] = 255;
                }
            }
        }
        Ok(())
    }

    /// Writes the canvas to a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        Ok(())
    }
}

fn trace_path(ctx: &cairo::Context, points: &[(f64, f64)]) {
    ctx.new_path();
    let (x0, y0) = points[0];
    ctx.move_to(x0, y0);
    for &(x, y) in &points[1..] {
        ctx.line_to(x, y);
    }
}

fn text_layout(ctx: &cairo::Context, text: &str, size: f64, font: &FontDescriptor) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = font.description(size);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, DARK_GRAY, RED, WHITE};

    fn assert_rgb(color: Option<Color>, expected: Color) {
        let color = color.expect("pixel inside canvas");
        assert_eq!(color.to_rgb8(), expected.to_rgb8());
    }

    #[test]
    fn paint_fills_every_pixel() {
        let mut canvas = Canvas::new(20, 10).unwrap();
        canvas.paint(DARK_GRAY).unwrap();
        assert_rgb(canvas.pixel(0, 0), DARK_GRAY);
        assert_rgb(canvas.pixel(19, 9), DARK_GRAY);
        assert!(canvas.pixel(20, 0).is_none());
    }

    #[test]
    fn polygon_fill_and_outline() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.paint(DARK_GRAY).unwrap();
        let square = [(10.0, 10.0), (30.0, 10.0), (30.0, 30.0), (10.0, 30.0)];
        canvas
            .polygon(&square, Some(RED), Some((BLUE, 2.0)))
            .unwrap();
        assert_rgb(canvas.pixel(20, 20), RED);
        assert_rgb(canvas.pixel(10, 20), BLUE);
        assert_rgb(canvas.pixel(2, 2), DARK_GRAY);
    }

    #[test]
    fn aliased_polyline_is_crisp() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.paint(DARK_GRAY).unwrap();
        canvas
            .polyline(&[(0.0, 10.0), (20.0, 10.0)], false, WHITE, 2.0, false)
            .unwrap();
        assert_rgb(canvas.pixel(5, 9), WHITE);
        assert_rgb(canvas.pixel(5, 10), WHITE);
        assert_rgb(canvas.pixel(5, 12), DARK_GRAY);
    }

    #[test]
    fn pixel_buffer_round_trip_through_canvas() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.paint(DARK_GRAY).unwrap();
        let mut pixels = canvas.read_pixels().unwrap();
        assert_eq!(pixels.get(3, 3), Some((51, 51, 51)));
        pixels.set(3, 4, (200, 10, 20));
        canvas.write_pixels(&pixels).unwrap();
        assert_rgb(canvas.pixel(3, 4), Color::rgb8(200, 10, 20));
    }

    #[test]
    fn circle_covers_its_center_only() {
        let mut canvas = Canvas::new(50, 50).unwrap();
        canvas.paint(DARK_GRAY).unwrap();
        canvas.circle((25.0, 25.0), 10.0, Some(RED), None).unwrap();
        assert_rgb(canvas.pixel(25, 25), RED);
        assert_rgb(canvas.pixel(25, 5), DARK_GRAY);
    }
}
