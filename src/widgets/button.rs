//! Clickable rectangle or ellipse.

use super::animation::ClickGate;
use super::registry::Named;
use super::{DrawEnv, Visibility};
use crate::draw::{Color, ColorSpec};
use crate::error::{Result, SketchError};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonShape {
    #[default]
    Rectangle,
    Ellipse,
}

impl FromStr for ButtonShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rectangle" => Ok(ButtonShape::Rectangle),
            "ellipse" => Ok(ButtonShape::Ellipse),
            _ => Err(format!("{} is not a valid button shape", s)),
        }
    }
}

/// Optional button settings.
#[derive(Debug, Clone)]
pub struct ButtonOptions {
    pub width: f64,
    pub height: f64,
    pub shape: ButtonShape,
    /// Fill color; with neither fill nor stroke the configured button color is used
    pub color: Option<ColorSpec>,
    /// Outline color
    pub stroke: Option<ColorSpec>,
    /// Outline width, used only with `stroke`
    pub weight: f64,
    /// Frames to stay unpressed before firing again; `None` uses the config value
    pub count: Option<u32>,
    /// Text centered on the button
    pub label: Option<String>,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 30.0,
            shape: ButtonShape::Rectangle,
            color: None,
            stroke: None,
            weight: 1.0,
            count: None,
            label: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    name: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    shape: ButtonShape,
    fill: Option<Color>,
    stroke: Option<(Color, f64)>,
    label: Option<String>,
    gate: ClickGate,
    visibility: Visibility,
}

impl Named for Button {
    const KIND: &'static str = "button";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Button {
    /// Creates a button with its top-left corner at (x, y).
    pub fn new(
        name: &str,
        (x, y): (f64, f64),
        options: ButtonOptions,
        default_count: u32,
        default_color: Color,
    ) -> Result<Self> {
        if options.width <= 0.0 || options.height <= 0.0 {
            return Err(SketchError::invalid_widget(
                Self::KIND,
                name,
                format!("size {}x{} must be positive", options.width, options.height),
            ));
        }

        let fill = options.color.as_ref().map(ColorSpec::resolve).transpose()?;
        let stroke = options
            .stroke
            .as_ref()
            .map(ColorSpec::resolve)
            .transpose()?
            .map(|color| (color, options.weight));
        let fill = match (fill, stroke) {
            (None, None) => Some(default_color),
            (fill, _) => fill,
        };

        Ok(Self {
            name: name.to_string(),
            x,
            y,
            width: options.width,
            height: options.height,
            shape: options.shape,
            fill,
            stroke,
            label: options.label,
            gate: ClickGate::new(options.count.unwrap_or(default_count)),
            visibility: Visibility::default(),
        })
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn shape(&self) -> ButtonShape {
        self.shape
    }

    pub fn count(&self) -> u32 {
        self.gate.count()
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

    /// Whether the point lies on the button's shape.
    pub fn collide(&self, (px, py): (f64, f64)) -> bool {
        match self.shape {
            ButtonShape::Rectangle => {
                px >= self.x
                    && px <= self.x + self.width
                    && py >= self.y
                    && py <= self.y + self.height
            }
            ButtonShape::Ellipse => {
                let (rx, ry) = (self.width / 2.0, self.height / 2.0);
                let dx = (px - self.x - rx) / rx;
                let dy = (py - self.y - ry) / ry;
                dx * dx + dy * dy <= 1.0
            }
        }
    }

    /// Advances the click counter; called on frames with the button released.
    pub fn click(&mut self) {
        self.gate.click();
    }

    pub fn check_click(&self) -> bool {
        self.gate.check_click()
    }

    pub fn reinit_click(&mut self) {
        self.gate.reinit_click();
    }

    pub fn draw(&self, env: &DrawEnv<'_>) -> Result<()> {
        match self.shape {
            ButtonShape::Rectangle => {
                let corners = [
                    (self.x, self.y),
                    (self.x + self.width, self.y),
                    (self.x + self.width, self.y + self.height),
                    (self.x, self.y + self.height),
                ];
                env.canvas.polygon(&corners, self.fill, self.stroke)?;
            }
            ButtonShape::Ellipse => {
                env.canvas
                    .ellipse(self.x, self.y, self.width, self.height, self.fill, self.stroke)?;
            }
        }

        if let Some(label) = &self.label {
            let text_color = self
                .fill
                .map(Color::contrasting)
                .or(self.stroke.map(|(c, _)| c))
                .unwrap_or(env.background.contrasting());
            let size = (self.height * 0.5).max(1.0);
            let (w, h) = env.canvas.text_extent(label, size, env.font)?;
            env.canvas.text(
                self.x + (self.width - w) / 2.0,
                self.y + (self.height - h) / 2.0,
                label,
                text_color,
                size,
                env.font,
            )?;
        }
        Ok(())
    }
}
