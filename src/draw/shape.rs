//! Vertex collection between `begin_shape` and `end_shape`.

use log::warn;

/// How a finished shape should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedShape {
    /// Sketch-space vertices, with the first repeated at the end when closed
    pub vertices: Vec<(f64, f64)>,
    /// Fill as a polygon instead of stroking an open polyline
    pub filled: bool,
}

/// Collects vertices while a shape is open.
#[derive(Debug, Default)]
pub struct ShapeBuilder {
    vertices: Option<Vec<(f64, f64)>>,
}

impl ShapeBuilder {
    pub fn is_drawing(&self) -> bool {
        self.vertices.is_some()
    }

    /// Starts a new shape, discarding any unfinished one.
    pub fn begin(&mut self) {
        if self.is_drawing() {
            warn!("begin_shape called while a shape was already started, previous vertices dropped");
        }
        self.vertices = Some(Vec::new());
    }

    pub fn vertex(&mut self, point: (f64, f64)) {
        match self.vertices.as_mut() {
            Some(vertices) => vertices.push(point),
            None => warn!("vertex called outside begin_shape/end_shape, ignored"),
        }
    }

    /// Closes the shape. Returns `None` when no shape was started.
    pub fn end(&mut self, filled: bool, closed: bool) -> Option<FinishedShape> {
        let Some(mut vertices) = self.vertices.take() else {
            warn!("end_shape called without begin_shape, nothing drawn");
            return None;
        };
        if closed {
            if let Some(&first) = vertices.first() {
                vertices.push(first);
            }
        }
        Some(FinishedShape { vertices, filled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_shape_repeats_first_vertex() {
        let mut shape = ShapeBuilder::default();
        shape.begin();
        shape.vertex((0.0, 0.0));
        shape.vertex((10.0, 0.0));
        shape.vertex((10.0, 10.0));
        let done = shape.end(false, true).unwrap();
        assert_eq!(done.vertices.len(), 4);
        assert_eq!(done.vertices[3], (0.0, 0.0));
        assert!(!shape.is_drawing());
    }

    #[test]
    fn vertex_outside_shape_is_ignored() {
        let mut shape = ShapeBuilder::default();
        shape.vertex((1.0, 1.0));
        assert!(shape.end(true, false).is_none());
        shape.begin();
        let done = shape.end(true, false).unwrap();
        assert!(done.vertices.is_empty());
        assert!(done.filled);
    }
}
