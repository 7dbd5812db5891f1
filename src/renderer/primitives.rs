//! Shape, text, background and pixel calls.
//!
//! Sketch coordinates go through the current transform here; the canvas only
//! ever sees window pixels.

use super::Renderer;
use crate::capture;
use crate::draw::{ColorSpec, DARK_GRAY, PixelBuffer, RectMode};
use crate::error::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};

impl Renderer {
    /// Straight line in the stroke color, drawn even when stroking is disabled.
    pub fn line(&mut self, p1: (f64, f64), p2: (f64, f64)) {
        self.stroke_path(&[p1, p2], false, false);
    }

    /// Connected segments, optionally closed.
    pub fn lines(&mut self, points: &[(f64, f64)], closed: bool) {
        self.stroke_path(points, closed, false);
    }

    /// Antialiased [`Renderer::line`].
    pub fn aaline(&mut self, p1: (f64, f64), p2: (f64, f64)) {
        self.stroke_path(&[p1, p2], false, true);
    }

    /// Antialiased [`Renderer::lines`].
    pub fn aalines(&mut self, points: &[(f64, f64)], closed: bool) {
        self.stroke_path(points, closed, true);
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], closed: bool, antialias: bool) {
        let points = self.state.transform.apply_all(points);
        let result = self.canvas.polyline(
            &points,
            closed,
            self.state.stroke_color,
            self.state.stroke_weight,
            antialias,
        );
        self.report("lines", result);
    }

    /// Filled and/or outlined polygon.
    pub fn polygon(&mut self, points: &[(f64, f64)]) {
        self.state.ensure_drawable();
        let points = self.state.transform.apply_all(points);
        let result = self.canvas.polygon(
            &points,
            self.state.active_fill(),
            self.state.active_stroke(),
        );
        self.report("polygon", result);
    }

    /// Rectangle anchored according to the rect mode. Each corner goes
    /// through the transform, so rotation turns the rectangle.
    pub fn rect(&mut self, (x, y): (f64, f64), width: f64, height: f64) {
        let (x, y) = self.anchor_corner((x, y), width, height);
        self.polygon(&[
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ]);
    }

    /// Top-left corner for an anchor under the rect mode. Center mode
    /// backs off by the floored half size, keeping odd sizes on whole pixels.
    fn anchor_corner(&self, (x, y): (f64, f64), width: f64, height: f64) -> (f64, f64) {
        match self.state.rect_mode {
            RectMode::Corner => (x, y),
            RectMode::Center => (x - (width / 2.0).floor(), y - (height / 2.0).floor()),
        }
    }

    pub fn square(&mut self, anchor: (f64, f64), size: f64) {
        self.rect(anchor, size, size);
    }

    /// Axis-aligned ellipse. Rotation and translation only move the anchor.
    pub fn ellipse(&mut self, anchor: (f64, f64), width: f64, height: f64) {
        self.state.ensure_drawable();
        let transform = &self.state.transform;
        let (x, y) = transform.apply(anchor);
        let width = transform.apply_length(width);
        let height = transform.apply_length(height);
        let (x, y) = self.anchor_corner((x, y), width, height);
        let result = self.canvas.ellipse(
            x,
            y,
            width,
            height,
            self.state.active_fill(),
            self.state.active_stroke(),
        );
        self.report("ellipse", result);
    }

    pub fn circle(&mut self, center: (f64, f64), radius: f64) {
        self.state.ensure_drawable();
        let center = self.state.transform.apply(center);
        let radius = self.state.transform.apply_length(radius);
        let result = self.canvas.circle(
            center,
            radius,
            self.state.active_fill(),
            self.state.active_stroke(),
        );
        self.report("circle", result);
    }

    /// Disc of the stroke color whose radius is the stroke weight.
    pub fn point(&mut self, p: (f64, f64)) {
        let center = self.state.transform.apply(p);
        let result = self.canvas.circle(
            center,
            self.state.stroke_weight,
            Some(self.state.stroke_color),
            None,
        );
        self.report("point", result);
    }

    /// Text with its top-left corner at (x, y). Transforms do not apply.
    pub fn text(&mut self, x: f64, y: f64, text: &str) {
        let result = self.canvas.text(
            x,
            y,
            text,
            self.state.text_color,
            self.state.text_size,
            &self.font,
        );
        self.report("text", result);
    }

    /// Fills the whole window. Invalid colors fall back to dark gray.
    pub fn background(&mut self, color: impl Into<ColorSpec>) {
        let spec: ColorSpec = color.into();
        self.background = spec.resolve().unwrap_or_else(|e| {
            warn!("{}, using the default background", e);
            DARK_GRAY
        });
        let result = self.canvas.paint(self.background);
        self.report("background", result);
    }

    // ------------------------------------------------------------------
    // Custom shapes
    // ------------------------------------------------------------------

    pub fn begin_shape(&mut self) {
        self.shape.begin();
    }

    pub fn vertex(&mut self, p: (f64, f64)) {
        self.shape.vertex(p);
    }

    /// Draws the collected vertices as a polygon when `filled`, an open polyline otherwise.
    pub fn end_shape(&mut self, filled: bool, closed: bool) {
        let Some(shape) = self.shape.end(filled, closed) else {
            return;
        };
        if shape.filled {
            self.polygon(&shape.vertices);
        } else {
            self.lines(&shape.vertices, false);
        }
    }

    // ------------------------------------------------------------------
    // Pixels
    // ------------------------------------------------------------------

    /// Copies the canvas into the pixel buffer.
    pub fn load_pixels(&mut self) {
        match self.canvas.read_pixels() {
            Ok(buffer) => self.pixels = Some(buffer),
            Err(e) => warn!("load_pixels failed: {}", e),
        }
    }

    /// The buffer filled by [`Renderer::load_pixels`].
    pub fn pixels_mut(&mut self) -> Option<&mut PixelBuffer> {
        if self.pixels.is_none() {
            warn!("pixels were never loaded, call load_pixels first");
        }
        self.pixels.as_mut()
    }

    /// Writes the pixel buffer back onto the canvas.
    pub fn update_pixels(&mut self) {
        let Some(buffer) = self.pixels.as_ref() else {
            warn!("pixels were never loaded, nothing updated");
            return;
        };
        if let Err(e) = self.canvas.write_pixels(buffer) {
            warn!("update_pixels failed: {}", e);
        }
    }

    /// Saves the canvas as PNG; without a path a timestamped name is used.
    pub fn save_frame(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => capture::next_frame_path(&self.config.capture)?,
        };
        self.canvas.save_png(&path)?;
        info!("Saved frame to {}", path.display());
        Ok(path)
    }
}
