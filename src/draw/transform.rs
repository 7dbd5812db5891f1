//! Translate / rotate / scale bookkeeping applied to sketch coordinates.
//!
//! Each component replaces its previous value (calls are not cumulative) and
//! points are mapped scale first, then rotation about the origin, then
//! translation. Components carry an end-of-frame [`Behaviour`].

use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// What happens to a transform component at the end of each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Behaviour {
    /// Cleared after every frame
    #[default]
    Reset,
    /// Carried over to the next frame
    Keep,
}

impl<'de> Deserialize<'de> for Behaviour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_keyword(deserializer)
    }
}

impl FromStr for Behaviour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reset" => Ok(Behaviour::Reset),
            "keep" => Ok(Behaviour::Keep),
            _ => Err(format!("{} is not a valid behaviour", s)),
        }
    }
}

/// The current translation, rotation and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    offset: (f64, f64),
    angle: f64,
    factor: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            offset: (0.0, 0.0),
            angle: 0.0,
            factor: 1.0,
        }
    }

    /// Replaces the origin offset.
    pub fn translate(&mut self, x: f64, y: f64) {
        self.offset = (x, y);
    }

    /// Replaces the rotation angle (radians, about the origin).
    pub fn rotate(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Replaces the scale factor. Factors `<= 0` are rejected with a warning.
    pub fn scale(&mut self, factor: f64) {
        if factor <= 0.0 {
            warn!("scale of {} is not allowed, nothing happened", factor);
            return;
        }
        self.factor = factor;
    }

    pub fn reset_translation(&mut self) {
        self.offset = (0.0, 0.0);
    }

    pub fn reset_rotation(&mut self) {
        self.angle = 0.0;
    }

    pub fn reset_scale(&mut self) {
        self.factor = 1.0;
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn has_translation(&self) -> bool {
        self.offset != (0.0, 0.0)
    }

    pub fn has_rotation(&self) -> bool {
        self.angle != 0.0
    }

    pub fn has_scale(&self) -> bool {
        self.factor != 1.0
    }

    pub fn is_identity(&self) -> bool {
        !self.has_translation() && !self.has_rotation() && !self.has_scale()
    }

    /// Maps a sketch point to canvas coordinates.
    pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        if self.has_scale() {
            x *= self.factor;
            y *= self.factor;
        }
        if self.has_rotation() {
            let (sin, cos) = self.angle.sin_cos();
            (x, y) = (x * cos - y * sin, x * sin + y * cos);
        }
        if self.has_translation() {
            x += self.offset.0;
            y += self.offset.1;
        }
        (x, y)
    }

    /// Maps every point of a slice.
    pub fn apply_all(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        points.iter().map(|&p| self.apply(p)).collect()
    }

    /// Scales a length (radius, width...) by the current factor.
    pub fn apply_length(&self, length: f64) -> f64 {
        length * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn identity_leaves_points_alone() {
        let t = Transform::identity();
        assert!(t.is_identity());
        assert_eq!(t.apply((3.0, -4.0)), (3.0, -4.0));
    }

    #[test]
    fn translate_replaces_instead_of_adding() {
        let mut t = Transform::identity();
        t.translate(10.0, 5.0);
        t.translate(1.0, 2.0);
        assert_eq!(t.apply((0.0, 0.0)), (1.0, 2.0));
        t.translate(0.0, 0.0);
        assert!(!t.has_translation());
    }

    #[test]
    fn scale_then_rotate_then_translate() {
        let mut t = Transform::identity();
        t.translate(100.0, 50.0);
        t.rotate(FRAC_PI_2);
        t.scale(2.0);
        // (1, 0) -> scale (2, 0) -> rotate (0, 2) -> translate (100, 52)
        assert_close(t.apply((1.0, 0.0)), (100.0, 52.0));
    }

    #[test]
    fn non_positive_scale_is_ignored() {
        let mut t = Transform::identity();
        t.scale(3.0);
        t.scale(0.0);
        t.scale(-2.0);
        assert_eq!(t.factor(), 3.0);
        assert_eq!(t.apply_length(2.0), 6.0);
    }

    #[test]
    fn resets_clear_single_components() {
        let mut t = Transform::identity();
        t.translate(1.0, 1.0);
        t.rotate(1.0);
        t.scale(2.0);
        t.reset_rotation();
        assert!(t.has_translation() && !t.has_rotation() && t.has_scale());
        t.reset_translation();
        t.reset_scale();
        assert!(t.is_identity());
    }

    #[test]
    fn behaviour_parses_case_insensitively() {
        assert_eq!("RESET".parse::<Behaviour>(), Ok(Behaviour::Reset));
        assert_eq!("Keep".parse::<Behaviour>(), Ok(Behaviour::Keep));
        assert!("forever".parse::<Behaviour>().is_err());
    }
}
