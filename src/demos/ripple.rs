//! Water ripples propagated through two height buffers and drawn per pixel.

use crate::input::MouseButton;
use crate::renderer::{Renderer, Sketch};

pub const WIDTH: i32 = 300;
pub const HEIGHT: i32 = 200;

const DAMP: f64 = 0.99;
const DROP: f64 = 255.0;

/// Two height maps; each frame the current one is derived from the previous.
pub struct RippleSketch {
    cols: usize,
    rows: usize,
    current: Vec<f64>,
    previous: Vec<f64>,
}

impl RippleSketch {
    pub fn new() -> Self {
        Self::with_size(WIDTH as usize, HEIGHT as usize)
    }

    pub fn with_size(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            current: vec![0.0; cols * rows],
            previous: vec![0.0; cols * rows],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Disturbs the water at `(x, y)`; positions outside the buffers are ignored.
    pub fn drop_at(&mut self, x: f64, y: f64) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.cols && y < self.rows {
            let i = self.index(x, y);
            self.previous[i] = DROP;
        }
    }

    /// Advances the interior one step, calling `plot` with each new shade,
    /// then swaps the buffers.
    pub fn advance(&mut self, mut plot: impl FnMut(usize, usize, u8)) {
        for y in 1..self.rows.saturating_sub(1) {
            for x in 1..self.cols.saturating_sub(1) {
                let i = self.index(x, y);
                let around = self.previous[i - 1]
                    + self.previous[i + 1]
                    + self.previous[i - self.cols]
                    + self.previous[i + self.cols];
                let height = (around / 2.0 - self.current[i]) * DAMP;
                self.current[i] = height;
                let shade = height.abs().round().min(255.0) as u8;
                plot(x, y, shade);
            }
        }
        std::mem::swap(&mut self.current, &mut self.previous);
    }
}

impl Default for RippleSketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for RippleSketch {
    fn draw(&mut self, renderer: &mut Renderer) {
        if renderer.input().mouse_is_down(MouseButton::Left) {
            let (x, y) = renderer.mouse_pos();
            self.drop_at(x, y);
        }

        renderer.load_pixels();
        if let Some(pixels) = renderer.pixels_mut() {
            self.advance(|x, y, c| pixels.set(x, y, (c, c, c)));
        }
        renderer.update_pixels();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_spreads_to_neighbours() {
        let mut r = Renderer::new(WIDTH, HEIGHT, "ripple").unwrap();
        let mut sketch = RippleSketch::new();
        r.input_mut()
            .on_mouse_press(MouseButton::Left, 150.0, 100.0);
        r.step(&mut sketch);

        r.load_pixels();
        let pixels = r.pixels_mut().unwrap();
        assert_eq!(pixels.get(149, 100), Some((126, 126, 126)));
        assert_eq!(pixels.get(150, 101), Some((126, 126, 126)));
        assert_eq!(pixels.get(150, 100), Some((0, 0, 0)));
        // the border is never written
        assert_eq!(pixels.get(0, 0), Some((51, 51, 51)));
    }

    #[test]
    fn still_water_stays_flat() {
        let mut sketch = RippleSketch::with_size(10, 10);
        let mut shades = Vec::new();
        sketch.advance(|_, _, c| shades.push(c));
        assert_eq!(shades.len(), 64);
        assert!(shades.iter().all(|&c| c == 0));
    }

    #[test]
    fn drops_outside_are_ignored() {
        let mut sketch = RippleSketch::with_size(10, 10);
        sketch.drop_at(-1.0, 5.0);
        sketch.drop_at(10.0, 5.0);
        assert!(sketch.previous.iter().all(|&h| h == 0.0));
    }
}
