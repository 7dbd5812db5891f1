//! Global drawing attributes and the push/pop stack that saves them.

use super::color::{Color, ColorSpec, WHITE};
use super::transform::{Behaviour, Transform};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// How the anchor point of `rect`, `square` and `ellipse` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RectMode {
    /// Anchor is the top-left corner
    #[default]
    Corner,
    /// Anchor is the center
    Center,
}

impl<'de> Deserialize<'de> for RectMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_keyword(deserializer)
    }
}

impl FromStr for RectMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "corner" => Ok(RectMode::Corner),
            "center" => Ok(RectMode::Center),
            _ => Err(format!("{} is not a valid rect mode", s)),
        }
    }
}

/// Every attribute that `push` saves and `pop` restores.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub fill_color: Color,
    pub fill_enabled: bool,
    pub stroke_color: Color,
    pub stroke_enabled: bool,
    pub stroke_weight: f64,
    pub rect_mode: RectMode,
    pub text_color: Color,
    pub text_size: f64,
    pub transform: Transform,
    pub translation_behaviour: Behaviour,
    pub rotation_behaviour: Behaviour,
    pub scale_behaviour: Behaviour,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill_color: WHITE,
            fill_enabled: true,
            stroke_color: WHITE,
            stroke_enabled: true,
            stroke_weight: 1.0,
            rect_mode: RectMode::Corner,
            text_color: WHITE,
            text_size: 12.0,
            transform: Transform::identity(),
            translation_behaviour: Behaviour::Reset,
            rotation_behaviour: Behaviour::Reset,
            scale_behaviour: Behaviour::Reset,
        }
    }
}

impl DrawState {
    /// Changes the fill color and enables filling. Invalid colors change nothing.
    pub fn set_fill(&mut self, spec: ColorSpec) {
        match spec.resolve() {
            Ok(color) => {
                self.fill_color = color;
                self.fill_enabled = true;
            }
            Err(e) => warn!("{}, fill unchanged", e),
        }
    }

    /// Changes the stroke color and enables stroking. Invalid colors change nothing.
    pub fn set_stroke(&mut self, spec: ColorSpec) {
        match spec.resolve() {
            Ok(color) => {
                self.stroke_color = color;
                self.stroke_enabled = true;
            }
            Err(e) => warn!("{}, stroke unchanged", e),
        }
    }

    /// Changes the stroke weight and enables stroking.
    pub fn set_stroke_weight(&mut self, weight: f64) {
        self.stroke_enabled = true;
        self.stroke_weight = weight;
    }

    pub fn set_text_color(&mut self, spec: ColorSpec) {
        match spec.resolve() {
            Ok(color) => self.text_color = color,
            Err(e) => warn!("{}, text color unchanged", e),
        }
    }

    /// Fill color used by closed shapes, `None` when filling is disabled.
    pub fn active_fill(&self) -> Option<Color> {
        self.fill_enabled.then_some(self.fill_color)
    }

    /// Outline color and weight, `None` when stroking is disabled.
    pub fn active_stroke(&self) -> Option<(Color, f64)> {
        self.stroke_enabled
            .then_some((self.stroke_color, self.stroke_weight))
    }

    /// Makes sure a closed shape produces something visible.
    ///
    /// With both fill and stroke disabled, stroking comes back on; a non-positive
    /// weight is then raised to 1.
    pub fn ensure_drawable(&mut self) {
        if self.stroke_enabled || self.fill_enabled {
            return;
        }
        warn!("stroking and filling both disabled, stroking is now enabled");
        self.stroke_enabled = true;
        if self.stroke_weight <= 0.0 {
            warn!(
                "stroke weight set to {}, stroke weight is now 1",
                self.stroke_weight
            );
            self.stroke_weight = 1.0;
        }
    }

    /// Clears every transform component whose behaviour is [`Behaviour::Reset`].
    pub fn end_frame(&mut self) {
        if self.translation_behaviour == Behaviour::Reset {
            self.transform.reset_translation();
        }
        if self.rotation_behaviour == Behaviour::Reset {
            self.transform.reset_rotation();
        }
        if self.scale_behaviour == Behaviour::Reset {
            self.transform.reset_scale();
        }
    }

    /// Clears translation and rotation, restores the corner rect mode and the
    /// reset translation behaviour. Colors, sizes and scale are untouched.
    pub fn reset_matrix(&mut self) {
        self.transform.reset_translation();
        self.transform.reset_rotation();
        self.rect_mode = RectMode::Corner;
        self.translation_behaviour = Behaviour::Reset;
    }
}

/// Saved drawing states, most recent last.
#[derive(Debug, Default)]
pub struct StateStack {
    saves: Vec<DrawState>,
}

impl StateStack {
    pub fn push(&mut self, state: &DrawState) {
        self.saves.push(state.clone());
    }

    /// Returns the most recent save, warning when there is none.
    pub fn pop(&mut self) -> Option<DrawState> {
        let state = self.saves.pop();
        if state.is_none() {
            warn!("no save was found, nothing changed");
        }
        state
    }

    pub fn depth(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }
}
