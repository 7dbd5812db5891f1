//! Horizontal value slider.

use super::registry::Named;
use super::{DrawEnv, Visibility};
use crate::draw::{Color, ColorSpec};
use crate::error::{Result, SketchError};
use crate::util::{map_range, round_to};
use log::warn;
use std::str::FromStr;

/// Shape of the slider cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Square,
    Circle,
    Cross,
    Plus,
}

impl FromStr for CursorShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "square" => Ok(CursorShape::Square),
            "circle" => Ok(CursorShape::Circle),
            "cross" => Ok(CursorShape::Cross),
            "plus" => Ok(CursorShape::Plus),
            _ => Err(format!("{} is not a valid cursor shape", s)),
        }
    }
}

/// Optional slider settings.
#[derive(Debug, Clone)]
pub struct SliderOptions {
    /// Bar length in pixels
    pub length: f64,
    /// Cursor half-size in pixels
    pub radius: f64,
    pub shape: CursorShape,
    /// Bar thickness in pixels
    pub thickness: f64,
    /// Bar color right of the cursor
    pub color: ColorSpec,
    /// Bar color left of the cursor, also used for the cursor
    pub full_color: ColorSpec,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            length: 100.0,
            radius: 8.0,
            shape: CursorShape::Square,
            thickness: 2.0,
            color: ColorSpec::Gray(155),
            full_color: ColorSpec::Gray(255),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Slider {
    name: String,
    x: f64,
    y: f64,
    min: f64,
    max: f64,
    value: f64,
    incr: i32,
    length: f64,
    radius: f64,
    shape: CursorShape,
    thickness: f64,
    color: Color,
    full_color: Color,
    reported: Option<f64>,
    visibility: Visibility,
}

impl Named for Slider {
    const KIND: &'static str = "slider";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Slider {
    /// Creates a slider whose bar starts at (x, y).
    ///
    /// `incr` is the number of decimals values are rounded to. An initial
    /// value outside `[min, max]` is clamped with a warning.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        (x, y): (f64, f64),
        min: f64,
        max: f64,
        value: f64,
        incr: i32,
        options: SliderOptions,
    ) -> Result<Self> {
        if min >= max {
            return Err(SketchError::invalid_widget(
                Self::KIND,
                name,
                format!("min {} must be lower than max {}", min, max),
            ));
        }
        if options.length <= 0.0 {
            return Err(SketchError::invalid_widget(
                Self::KIND,
                name,
                format!("length {} must be positive", options.length),
            ));
        }
        if options.radius <= 0.0 {
            return Err(SketchError::invalid_widget(
                Self::KIND,
                name,
                format!("radius {} must be positive", options.radius),
            ));
        }

        let clamped = value.clamp(min, max);
        if clamped != value {
            warn!(
                "slider '{}' value {} is out of [{}, {}], using {}",
                name, value, min, max, clamped
            );
        }

        Ok(Self {
            name: name.to_string(),
            x,
            y,
            min,
            max,
            value: round_to(clamped, incr),
            incr,
            length: options.length,
            radius: options.radius,
            shape: options.shape,
            thickness: options.thickness,
            color: options.color.resolve()?,
            full_color: options.full_color.resolve()?,
            reported: None,
            visibility: Visibility::default(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// The value, but only when it changed since the previous call.
    pub fn new_value(&mut self) -> Option<f64> {
        if self.reported == Some(self.value) {
            return None;
        }
        self.reported = Some(self.value);
        Some(self.value)
    }

    pub fn hide(&mut self) {
        self.visibility.hide(Self::KIND, &self.name);
    }

    pub fn reveal(&mut self) {
        self.visibility.reveal(Self::KIND, &self.name);
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    fn cursor_x(&self) -> f64 {
        map_range(self.value, self.min, self.max, self.x, self.x + self.length)
    }

    /// Whether the point is on the bar or its cursor band.
    pub fn collide(&self, (px, py): (f64, f64)) -> bool {
        px >= self.x - self.radius
            && px <= self.x + self.length + self.radius
            && (py - self.y).abs() <= self.radius
    }

    /// Sets the value from a mouse x position, clamped to the bar.
    pub fn set_value(&mut self, (px, _): (f64, f64)) {
        let px = px.clamp(self.x, self.x + self.length);
        let value = map_range(px, self.x, self.x + self.length, self.min, self.max);
        self.value = round_to(value, self.incr).clamp(self.min, self.max);
    }

    pub fn draw(&self, env: &DrawEnv<'_>) -> Result<()> {
        let canvas = env.canvas;
        let segment = |a: (f64, f64), b: (f64, f64), color: Color, weight: f64| {
            canvas.polyline(&[a, b], false, color, weight, true)
        };

        let (cx, cy) = (self.cursor_x(), self.y);
        segment((self.x, cy), (cx, cy), self.full_color, self.thickness)?;
        segment((cx, cy), (self.x + self.length, cy), self.color, self.thickness)?;

        let r = self.radius;
        let weight = self.thickness.max(1.0);
        match self.shape {
            CursorShape::Square => {
                let corners = [
                    (cx - r, cy - r),
                    (cx + r, cy - r),
                    (cx + r, cy + r),
                    (cx - r, cy + r),
                ];
                canvas.polygon(&corners, Some(self.full_color), None)?;
            }
            CursorShape::Circle => {
                canvas.circle((cx, cy), r, Some(self.full_color), None)?;
            }
            CursorShape::Cross => {
                segment((cx - r, cy - r), (cx + r, cy + r), self.full_color, weight)?;
                segment((cx - r, cy + r), (cx + r, cy - r), self.full_color, weight)?;
            }
            CursorShape::Plus => {
                segment((cx - r, cy), (cx + r, cy), self.full_color, weight)?;
                segment((cx, cy - r), (cx, cy + r), self.full_color, weight)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(value: f64, incr: i32) -> Slider {
        Slider::new("s", (100.0, 50.0), 0.0, 10.0, value, incr, SliderOptions::default()).unwrap()
    }

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(slider(42.0, 1).value(), 10.0);
        assert_eq!(slider(-1.0, 1).value(), 0.0);
    }

    #[test]
    fn min_must_be_below_max() {
        let err = Slider::new("s", (0.0, 0.0), 5.0, 5.0, 5.0, 0, SliderOptions::default())
            .unwrap_err();
        assert!(matches!(err, SketchError::InvalidWidget { kind: "slider", .. }));
    }

    #[test]
    fn mouse_x_maps_to_rounded_value() {
        let mut s = slider(0.0, 0);
        s.set_value((137.0, 50.0));
        assert_eq!(s.value(), 4.0);
        s.set_value((500.0, 50.0));
        assert_eq!(s.value(), 10.0);

        let mut fine = slider(0.0, 2);
        fine.set_value((133.3, 50.0));
        assert_eq!(fine.value(), 3.33);
    }

    #[test]
    fn collide_includes_cursor_band() {
        let s = slider(5.0, 1);
        assert!(s.collide((95.0, 55.0)));
        assert!(s.collide((205.0, 42.0)));
        assert!(!s.collide((150.0, 60.0)));
        assert!(!s.collide((90.0, 50.0)));
    }

    #[test]
    fn new_value_reports_changes_only() {
        let mut s = slider(5.0, 1);
        assert_eq!(s.new_value(), Some(5.0));
        assert_eq!(s.new_value(), None);
        s.set_value((120.0, 50.0));
        assert_eq!(s.new_value(), Some(2.0));
        s.set_value((120.0, 50.0));
        assert_eq!(s.new_value(), None);
    }
}
