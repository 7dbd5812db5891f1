//! The sketch-facing drawing surface.
//!
//! [`Renderer`] owns the canvas, the drawing state, every widget registry,
//! the key map and the event registry. Backends feed it input and call
//! [`Renderer::step`] once per frame.

mod clock;
mod frame;
mod primitives;
mod sketch;
mod widgets;
#[cfg(test)]
mod tests;

pub use clock::FrameClock;
pub use sketch::{Sketch, Trigger};

use crate::config::{Action, Config, KeyBinding};
use crate::draw::{
    Behaviour, Canvas, Color, ColorSpec, DrawState, FontDescriptor, PixelBuffer, RectMode,
    ShapeBuilder, StateStack,
};
use crate::error::Result;
use crate::events::{EventRegistry, EventValue};
use crate::input::{InputState, Key, KeyBehaviour, KeyMap};
use crate::widgets::{Button, Menu, Registry, ScrollBar, Slider};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::Duration;

/// Immediate-mode drawing surface plus the widgets and bindings polled each frame.
pub struct Renderer {
    config: Config,
    canvas: Canvas,
    width: i32,
    height: i32,
    title: String,
    title_changed: bool,
    background: Color,
    font: FontDescriptor,
    state: DrawState,
    stack: StateStack,
    shape: ShapeBuilder,
    pixels: Option<PixelBuffer>,
    buttons: Registry<Button>,
    sliders: Registry<Slider>,
    menus: Registry<Menu>,
    scrollbar: Option<ScrollBar>,
    keys: KeyMap,
    builtin_keys: HashMap<KeyBinding, Action>,
    events: EventRegistry,
    input: InputState,
    clock: FrameClock,
    target_fps: u32,
    bench_mode: bool,
    running: bool,
    frame_count: u64,
}

impl Renderer {
    /// Creates a renderer with default settings and the given window size and title.
    pub fn new(width: i32, height: i32, title: &str) -> Result<Self> {
        let mut config = Config::default();
        config.window.width = width;
        config.window.height = height;
        config.window.title = title.to_string();
        Self::with_config(config)
    }

    /// Creates a renderer from a (possibly user-supplied) configuration.
    pub fn with_config(mut config: Config) -> Result<Self> {
        config.validate_and_clamp();

        let width = config.window.width;
        let height = config.window.height;
        let canvas = Canvas::new(width, height)?;
        let background = config.background_color();
        canvas.paint(background)?;

        let drawing = &config.drawing;
        let mut state = DrawState {
            stroke_weight: drawing.stroke_weight,
            rect_mode: drawing.rect_mode,
            text_size: drawing.text_size,
            translation_behaviour: drawing.translation_behaviour,
            rotation_behaviour: drawing.rotation_behaviour,
            scale_behaviour: drawing.scale_behaviour,
            ..DrawState::default()
        };
        state.set_fill(drawing.fill.clone());
        state.set_stroke(drawing.stroke.clone());
        state.set_text_color(drawing.text_color.clone());

        let builtin_keys = config.keybindings.build_action_map()?;
        debug!("Loaded {} built-in keybindings", builtin_keys.len());

        Ok(Self {
            font: config.font(),
            title: config.window.title.clone(),
            title_changed: false,
            target_fps: config.window.fps,
            canvas,
            width,
            height,
            background,
            state,
            stack: StateStack::default(),
            shape: ShapeBuilder::default(),
            pixels: None,
            buttons: Registry::default(),
            sliders: Registry::default(),
            menus: Registry::default(),
            scrollbar: None,
            keys: KeyMap::new(),
            builtin_keys,
            events: EventRegistry::new(),
            input: InputState::new(),
            clock: FrameClock::new(),
            bench_mode: false,
            running: true,
            frame_count: 0,
            config,
        })
    }

    // ------------------------------------------------------------------
    // Window
    // ------------------------------------------------------------------

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.title = title.to_string();
            self.title_changed = true;
        }
    }

    /// New title since the last call, for the backend to forward.
    pub(crate) fn take_title_update(&mut self) -> Option<String> {
        std::mem::take(&mut self.title_changed).then(|| self.title.clone())
    }

    /// Last color passed to [`Renderer::background`].
    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Input sink for backends and tests.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn mouse_pos(&self) -> (f64, f64) {
        self.input.mouse_pos()
    }

    pub fn mouse_x(&self) -> f64 {
        self.input.mouse_x()
    }

    pub fn mouse_y(&self) -> f64 {
        self.input.mouse_y()
    }

    // ------------------------------------------------------------------
    // Drawing state
    // ------------------------------------------------------------------

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn fill(&mut self, color: impl Into<ColorSpec>) {
        self.state.set_fill(color.into());
    }

    pub fn no_fill(&mut self) {
        self.state.fill_enabled = false;
    }

    pub fn stroke(&mut self, color: impl Into<ColorSpec>) {
        self.state.set_stroke(color.into());
    }

    pub fn no_stroke(&mut self) {
        self.state.stroke_enabled = false;
    }

    pub fn stroke_weight(&mut self, weight: f64) {
        self.state.set_stroke_weight(weight);
    }

    pub fn rect_mode(&mut self, mode: RectMode) {
        self.state.rect_mode = mode;
    }

    pub fn text_color(&mut self, color: impl Into<ColorSpec>) {
        self.state.set_text_color(color.into());
    }

    pub fn text_size(&mut self, size: f64) {
        if size <= 0.0 {
            warn!("text size {} is not allowed, nothing happened", size);
            return;
        }
        self.state.text_size = size;
    }

    pub fn text_font(&mut self, font: FontDescriptor) {
        self.font = font;
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    pub fn translate(&mut self, x: f64, y: f64) {
        self.state.transform.translate(x, y);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.state.transform.rotate(angle);
    }

    pub fn scale(&mut self, factor: f64) {
        self.state.transform.scale(factor);
    }

    pub fn reset_matrix(&mut self) {
        self.state.reset_matrix();
    }

    pub fn set_translation_behaviour(&mut self, behaviour: Behaviour) {
        self.state.translation_behaviour = behaviour;
    }

    pub fn set_rotation_behaviour(&mut self, behaviour: Behaviour) {
        self.state.rotation_behaviour = behaviour;
    }

    pub fn set_scale_behaviour(&mut self, behaviour: Behaviour) {
        self.state.scale_behaviour = behaviour;
    }

    /// Rotates what has been drawn so far about the window center.
    pub fn rotate_display(&mut self, angle: f64) {
        let result = self.canvas.transform_display(angle, 1.0);
        self.report("rotate_display", result);
    }

    /// Scales what has been drawn so far about the window center.
    pub fn scale_display(&mut self, factor: f64) {
        if factor <= 0.0 {
            warn!("display scale of {} is not allowed, nothing happened", factor);
            return;
        }
        let result = self.canvas.transform_display(0.0, factor);
        self.report("scale_display", result);
    }

    // ------------------------------------------------------------------
    // State stack
    // ------------------------------------------------------------------

    /// Saves the drawing state.
    pub fn push(&mut self) {
        self.stack.push(&self.state);
    }

    /// Restores the most recently saved drawing state.
    pub fn pop(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    // ------------------------------------------------------------------
    // Keys and events
    // ------------------------------------------------------------------

    /// Binds a key to an action name reported through [`Trigger::Key`].
    pub fn new_keypress(&mut self, key: Key, action: &str, behaviour: KeyBehaviour) -> Result<()> {
        self.keys.bind(key, action, behaviour)
    }

    /// Changes the action of a bound key, and its behaviour when given.
    pub fn update_keypress(
        &mut self,
        key: Key,
        action: &str,
        behaviour: Option<KeyBehaviour>,
    ) -> Result<()> {
        self.keys.update(key, action, behaviour)
    }

    pub fn kill_keypress(&mut self, key: Key) -> Result<()> {
        self.keys.kill(key)
    }

    /// Key to binding slot map.
    pub fn key_binding(&self) -> &HashMap<Key, usize> {
        self.keys.bindings()
    }

    /// Registers an event polled every frame; returns its id.
    pub fn new_event<F>(&mut self, name: &str, trigger: F) -> u64
    where
        F: FnMut(&InputState) -> Option<EventValue> + 'static,
    {
        self.events.add(name, trigger)
    }

    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventRegistry {
        &mut self.events
    }

    // ------------------------------------------------------------------
    // Frame control
    // ------------------------------------------------------------------

    /// Measured frames per second.
    pub fn fps(&self) -> f64 {
        self.clock.fps()
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Locks the frame rate; 0 unlocks it.
    pub fn set_fps(&mut self, fps: u32) {
        self.target_fps = fps;
    }

    pub fn bench_mode(&self) -> bool {
        self.bench_mode
    }

    /// In bench mode frames are still drawn but widgets, bindings and events are skipped.
    pub fn set_bench_mode(&mut self, enabled: bool) {
        if self.bench_mode == enabled {
            warn!("bench mode is already {}, nothing changed", if enabled { "on" } else { "off" });
            return;
        }
        info!("Bench mode {}", if enabled { "enabled" } else { "disabled" });
        self.bench_mode = enabled;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Delay before the next frame is due, `None` when the frame rate is unlocked.
    pub fn frame_delay(&self) -> Option<Duration> {
        self.clock.remaining(self.target_fps)
    }

    /// Stops the frame loop after the current frame.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Logs a failed cairo call; drawing never aborts the sketch.
    fn report(&self, what: &str, result: Result<()>) {
        if let Err(e) = result {
            warn!("{} failed: {}", what, e);
        }
    }
}
