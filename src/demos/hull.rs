//! Graham scan convex hull of random points, drawn once in `setup`.

use crate::error::Result;
use crate::renderer::{Renderer, Sketch};
use rand::Rng;

pub const SIZE: i32 = 600;
pub const POINT_COUNT: usize = 1_000;

const MARGIN: f64 = 20.0;

/// z component of (a - o) x (b - o).
fn cross(o: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// Convex hull starting from the lowest-y point, collinear points dropped.
pub fn convex_hull(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let Some(&start) = points
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.total_cmp(&b.0)))
    else {
        return Vec::new();
    };

    let angle = |p: &(f64, f64)| (p.1 - start.1).atan2(p.0 - start.0);
    let distance = |p: &(f64, f64)| (p.0 - start.0).powi(2) + (p.1 - start.1).powi(2);
    let mut rest: Vec<(f64, f64)> = points.iter().copied().filter(|&p| p != start).collect();
    rest.sort_by(|a, b| {
        angle(a)
            .total_cmp(&angle(b))
            .then(distance(a).total_cmp(&distance(b)))
    });

    let mut hull = vec![start];
    for p in rest {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

pub struct HullSketch {
    points: Vec<(f64, f64)>,
    hull: Vec<(f64, f64)>,
}

impl HullSketch {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        let hull = convex_hull(&points);
        Self { points, hull }
    }

    /// `count` points spread uniformly inside the window margins.
    pub fn random(count: usize) -> Self {
        let mut rng = rand::rng();
        let max = SIZE as f64 - MARGIN;
        let points = (0..count)
            .map(|_| {
                (
                    rng.random_range(MARGIN..=max).round(),
                    rng.random_range(MARGIN..=max).round(),
                )
            })
            .collect();
        Self::new(points)
    }

    pub fn hull(&self) -> &[(f64, f64)] {
        &self.hull
    }
}

impl Sketch for HullSketch {
    fn setup(&mut self, renderer: &mut Renderer) -> Result<()> {
        renderer.background(51);

        if let Some(&first) = self.hull.first() {
            renderer.stroke_weight(8.0);
            renderer.stroke("orange");
            renderer.point(first);
        }

        renderer.stroke_weight(4.0);
        renderer.stroke(255);
        for &p in &self.points {
            renderer.point(p);
        }

        renderer.stroke("green");
        for &p in &self.hull {
            renderer.point(p);
        }

        renderer.stroke_weight(2.0);
        renderer.lines(&self.hull, true);
        Ok(())
    }

    fn draw(&mut self, _renderer: &mut Renderer) {}
}
