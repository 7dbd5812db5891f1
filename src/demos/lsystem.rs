//! Fractal tree grown from an L-system and drawn with a turtle.
//!
//! Transforms replace rather than accumulate, so the turtle keeps its
//! position in the translation (mapped through the current rotation) and
//! its heading in the rotation angle. Branches are saved with `push`/`pop`.

use crate::error::Result;
use crate::renderer::{Renderer, Sketch, Trigger};
use crate::widgets::ButtonOptions;
use log::info;

pub const SIZE: i32 = 400;

const AXIOM: &str = "F";
const RULES: &[(char, &str)] = &[('F', "FF+[+F-F-F]-[-F+F+F]")];
const START_LENGTH: f64 = 100.0;
const MAX_GENERATIONS: u32 = 5;
const BUTTON: &str = "generate";

/// Applies the rewrite rules once to every symbol.
pub fn expand(sentence: &str) -> String {
    sentence
        .chars()
        .map(|symbol| {
            RULES
                .iter()
                .find(|(from, _)| *from == symbol)
                .map_or_else(|| symbol.to_string(), |(_, to)| to.to_string())
        })
        .collect()
}

pub struct LSystemSketch {
    sentence: String,
    length: f64,
    generation: u32,
    angle: f64,
}

impl LSystemSketch {
    pub fn new() -> Self {
        Self {
            sentence: AXIOM.to_string(),
            length: START_LENGTH,
            generation: 0,
            angle: 25f64.to_radians(),
        }
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    fn generate(&mut self, renderer: &mut Renderer) {
        if self.generation >= MAX_GENERATIONS {
            info!("tree is fully grown after {} generations", self.generation);
            return;
        }
        self.sentence = expand(&self.sentence);
        self.length *= 0.5;
        self.generation += 1;
        self.turtle(renderer);
    }

    fn turtle(&self, renderer: &mut Renderer) {
        renderer.background(51);
        renderer.reset_matrix();
        renderer.translate(SIZE as f64 / 2.0, SIZE as f64);
        renderer.stroke(255);
        renderer.stroke_weight(2.0);

        for symbol in self.sentence.chars() {
            match symbol {
                'F' => {
                    let tip = (0.0, -self.length);
                    let (x, y) = renderer.state().transform.apply(tip);
                    renderer.aaline((0.0, 0.0), tip);
                    renderer.translate(x, y);
                }
                '+' => {
                    let heading = renderer.state().transform.angle();
                    renderer.rotate(heading + self.angle);
                }
                '-' => {
                    let heading = renderer.state().transform.angle();
                    renderer.rotate(heading - self.angle);
                }
                '[' => renderer.push(),
                ']' => renderer.pop(),
                _ => {}
            }
        }

        renderer.reset_matrix();
    }
}

impl Default for LSystemSketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for LSystemSketch {
    fn setup(&mut self, renderer: &mut Renderer) -> Result<()> {
        renderer.text_size(20.0);
        renderer.create_button(
            BUTTON,
            (10.0, 10.0),
            ButtonOptions {
                color: Some(51.into()),
                stroke: Some(255.into()),
                label: Some(BUTTON.to_string()),
                ..ButtonOptions::default()
            },
        )?;
        self.turtle(renderer);
        Ok(())
    }

    fn draw(&mut self, _renderer: &mut Renderer) {}

    fn on_trigger(&mut self, renderer: &mut Renderer, trigger: &Trigger) {
        if let Trigger::Button(name) = trigger
            && name == BUTTON
        {
            self.generate(renderer);
        }
    }
}
