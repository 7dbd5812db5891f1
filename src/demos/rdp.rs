//! Ramer-Douglas-Peucker line simplification of a damped cosine.

use crate::error::Result;
use crate::renderer::{Renderer, Sketch};
use crate::util::map_range;
use crate::widgets::SliderOptions;
use std::f64::consts::PI;

pub const WIDTH: i32 = 600;
pub const HEIGHT: i32 = 400;

const SLIDER: &str = "epsilon";

/// Distance from `p` to the infinite line through `a` and `b`.
fn line_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length = dx.hypot(dy);
    if length == 0.0 {
        return (p.0 - a.0).hypot(p.1 - a.1);
    }
    ((p.0 - a.0) * dy - (p.1 - a.1) * dx).abs() / length
}

/// Simplifies a polyline, keeping points further than `epsilon` from the chords.
pub fn simplify(points: &[(f64, f64)], epsilon: f64) -> Vec<(f64, f64)> {
    if points.len() < 3 {
        return points.to_vec();
    }

    fn keep(points: &[(f64, f64)], start: usize, end: usize, epsilon: f64, out: &mut Vec<(f64, f64)>) {
        let furthest = (start + 1..end)
            .map(|i| (i, line_distance(points[i], points[start], points[end])))
            .max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((index, distance)) = furthest
            && distance > epsilon
        {
            keep(points, start, index, epsilon, out);
            out.push(points[index]);
            keep(points, index, end, epsilon, out);
        }
    }

    let last = points.len() - 1;
    let mut out = vec![points[0]];
    keep(points, 0, last, epsilon, &mut out);
    out.push(points[last]);
    out
}

pub struct RdpSketch {
    curve: Vec<(f64, f64)>,
    simplified: Vec<(f64, f64)>,
}

impl RdpSketch {
    pub fn new() -> Self {
        let curve: Vec<(f64, f64)> = (0..WIDTH)
            .map(|x| {
                let x = x as f64;
                let t = map_range(x, 0.0, WIDTH as f64, 0.0, 5.0);
                let y = (-t).exp() * (2.0 * PI * t).cos();
                (x, map_range(y, -1.0, 1.0, HEIGHT as f64, 0.0))
            })
            .collect();
        let simplified = simplify(&curve, 10.0);
        Self { curve, simplified }
    }
}

impl Default for RdpSketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for RdpSketch {
    fn setup(&mut self, renderer: &mut Renderer) -> Result<()> {
        renderer.create_slider(
            SLIDER,
            (350.0, 350.0),
            0.0,
            50.0,
            10.0,
            0,
            SliderOptions {
                length: 200.0,
                ..SliderOptions::default()
            },
        )?;
        renderer.stroke_weight(4.0);
        renderer.text_color(255);
        renderer.text_size(20.0);
        Ok(())
    }

    fn draw(&mut self, renderer: &mut Renderer) {
        if let Some(epsilon) = renderer.slider_mut(SLIDER).and_then(|s| s.new_value()) {
            self.simplified = simplify(&self.curve, epsilon);
        }

        renderer.background(51);
        renderer.stroke((255, 55, 155));
        renderer.aalines(&self.curve, false);
        renderer.stroke(255);
        renderer.aalines(&self.simplified, false);
        let fps = format!("fps : {}", renderer.fps().round());
        renderer.text(50.0, 10.0, &fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_collapses_to_endpoints() {
        let line: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 2.0 * i as f64)).collect();
        assert_eq!(simplify(&line, 0.5), vec![(0.0, 0.0), (9.0, 18.0)]);
    }

    #[test]
    fn peak_above_epsilon_is_kept() {
        let points = [(0.0, 0.0), (1.0, 0.1), (2.0, 5.0), (3.0, 0.1), (4.0, 0.0)];
        assert_eq!(
            simplify(&points, 1.0),
            vec![(0.0, 0.0), (2.0, 5.0), (4.0, 0.0)]
        );
        assert_eq!(simplify(&points, 10.0), vec![(0.0, 0.0), (4.0, 0.0)]);
    }

    #[test]
    fn larger_epsilon_keeps_fewer_points() {
        let sketch = RdpSketch::new();
        let fine = simplify(&sketch.curve, 1.0).len();
        let coarse = simplify(&sketch.curve, 30.0).len();
        assert!(coarse < fine);
        assert!(fine < sketch.curve.len());
    }
}
