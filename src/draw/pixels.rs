//! Plain RGB copy of the canvas for per-pixel sketches.

/// Row-major RGB pixels, indexed `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<(u8, u8, u8)>,
}

impl PixelBuffer {
    /// Black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![(0, 0, 0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<(u8, u8, u8)> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Sets one pixel; writes outside the buffer are ignored.
    pub fn set(&mut self, x: usize, y: usize, rgb: (u8, u8, u8)) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = rgb;
        }
    }

    /// Fills every pixel with the same color.
    pub fn fill(&mut self, rgb: (u8, u8, u8)) {
        self.data.fill(rgb);
    }
}
