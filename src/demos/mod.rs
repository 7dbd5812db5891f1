//! Sketches bundled with the `phoenyx` binary.

pub mod hull;
pub mod lsystem;
pub mod rdp;
pub mod ripple;

use crate::renderer::Sketch;
use clap::ValueEnum;

/// A bundled sketch, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Ramer-Douglas-Peucker simplification with an epsilon slider
    Rdp,
    /// Convex hull of random points
    Hull,
    /// Water ripples under the mouse, drawn through the pixel buffer
    Ripple,
    /// Fractal tree grown one generation per button click
    LSystem,
}

impl Demo {
    /// Window size the sketch is written for.
    pub fn size(self) -> (i32, i32) {
        match self {
            Demo::Rdp => (rdp::WIDTH, rdp::HEIGHT),
            Demo::Hull => (hull::SIZE, hull::SIZE),
            Demo::Ripple => (ripple::WIDTH, ripple::HEIGHT),
            Demo::LSystem => (lsystem::SIZE, lsystem::SIZE),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Rdp => "RDP Line Simplification",
            Demo::Hull => "Convex hull",
            Demo::Ripple => "Water ripple",
            Demo::LSystem => "L-system fractal trees",
        }
    }

    pub fn sketch(self) -> Box<dyn Sketch> {
        match self {
            Demo::Rdp => Box::new(rdp::RdpSketch::new()),
            Demo::Hull => Box::new(hull::HullSketch::random(hull::POINT_COUNT)),
            Demo::Ripple => Box::new(ripple::RippleSketch::new()),
            Demo::LSystem => Box::new(lsystem::LSystemSketch::new()),
        }
    }
}
