//! Vertical scroll bar for sketches taller than the window.
//!
//! Collapsed it is a thin line on the right edge; hovering the edge widens it
//! into a track with a draggable thumb.

use super::animation::Animation;
use super::{DrawEnv, Visibility};
use crate::draw::Color;
use crate::error::{Result, SketchError};
use crate::util::map_range;
use log::warn;

const ACTIVE_WIDTH: f64 = 15.0;
const IDLE_WIDTH: f64 = 5.0;
const ACTIVATE_DISTANCE: f64 = 5.0;

/// Fraction of the range moved by one wheel step.
pub const WHEEL_STEP: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct ScrollBar {
    min: f64,
    max: f64,
    value: f64,
    thumb_height: f64,
    thumb: Color,
    track: Color,
    window: (f64, f64),
    active: bool,
    grab: Option<f64>,
    animation: Animation,
    visibility: Visibility,
}

impl ScrollBar {
    /// Creates a scroll bar over `range`, which must be taller than the window.
    pub fn new(range: (f64, f64), window: (f64, f64), thumb: Color, track: Color) -> Result<Self> {
        let (min, max) = (range.0.min(range.1), range.0.max(range.1));
        let h = window.1;
        let span = max - min;
        if span <= h {
            return Err(SketchError::invalid_widget(
                "scrollbar",
                "scrollbar",
                format!("range {} must exceed the window height {}", span, h),
            ));
        }
        Ok(Self {
            min,
            max,
            value: min,
            thumb_height: 10.0 + (h - 10.0) / (1.0 + span - h).sqrt(),
            thumb,
            track,
            window,
            active: false,
            grab: None,
            animation: Animation::default(),
            visibility: Visibility::default(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn thumb_height(&self) -> f64 {
        self.thumb_height
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_playing(&self) -> bool {
        self.animation.is_playing()
    }

    pub fn hide(&mut self) {
        self.visibility.hide("scrollbar", "scrollbar");
    }

    pub fn reveal(&mut self) {
        self.visibility.reveal("scrollbar", "scrollbar");
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    /// Top of the thumb for the current value.
    pub fn y_pos(&self) -> f64 {
        map_range(
            self.value,
            self.min,
            self.max,
            0.0,
            self.window.1 - self.thumb_height,
        )
    }

    /// Sets the value from the thumb's top position, clamped to the range.
    pub fn set_value_by_y(&mut self, y: f64) {
        let value = map_range(y, 0.0, self.window.1 - self.thumb_height, self.min, self.max);
        self.value = value.clamp(self.min, self.max);
    }

    /// Moves up by a fraction of the range.
    pub fn scroll_up(&mut self, amount: f64) {
        self.value = (self.value - amount * (self.max - self.min)).max(self.min);
    }

    /// Moves down by a fraction of the range.
    pub fn scroll_down(&mut self, amount: f64) {
        self.value = (self.value + amount * (self.max - self.min)).min(self.max);
    }

    /// Applies accumulated wheel steps; positive scrolls down.
    pub fn on_wheel(&mut self, steps: f64) {
        if steps > 0.0 {
            self.scroll_down(steps * WHEEL_STEP);
        } else if steps < 0.0 {
            self.scroll_up(-steps * WHEEL_STEP);
        }
    }

    fn activate(&mut self, ticks: u32) {
        if self.active || self.animation.is_playing() {
            warn!("scrollbar is already active or animated, nothing changed");
            return;
        }
        self.active = true;
        self.animation.start(ticks);
    }

    fn deactivate(&mut self, ticks: u32) {
        if !self.active || self.animation.is_playing() {
            warn!("scrollbar is already inactive or animated, nothing changed");
            return;
        }
        self.active = false;
        self.grab = None;
        self.animation.start(ticks);
    }

    /// Hover handling: the right edge activates, leaving the track deactivates.
    pub fn update_state(&mut self, (px, _): (f64, f64), ticks: u32) {
        if self.animation.is_playing() || self.grab.is_some() {
            return;
        }
        let width = self.window.0;
        if self.active && px < width - ACTIVE_WIDTH {
            self.deactivate(ticks);
        } else if !self.active && px >= width - ACTIVATE_DISTANCE {
            self.activate(ticks);
        }
    }

    /// Left button held at `pos`: grabs the thumb or keeps dragging it.
    pub fn drag(&mut self, (px, py): (f64, f64)) {
        if !self.active {
            return;
        }
        match self.grab {
            Some(offset) => self.set_value_by_y(py - offset),
            None => {
                let top = self.y_pos();
                if px >= self.window.0 - ACTIVE_WIDTH && py >= top && py <= top + self.thumb_height {
                    self.grab = Some(py - top);
                }
            }
        }
    }

    /// Left button released.
    pub fn release(&mut self) {
        self.grab = None;
    }

    /// Draws the bar and advances the hover animation.
    pub fn draw(&mut self, env: &DrawEnv<'_>) -> Result<()> {
        if self.is_hidden() {
            return Ok(());
        }
        let canvas = env.canvas;
        let (width, height) = self.window;
        let top = self.y_pos();

        // 0 when collapsed, 1 when fully open
        let openness = match (self.active, self.animation.is_playing()) {
            (true, false) => 1.0,
            (false, false) => 0.0,
            (true, true) => self.animation.progress(),
            (false, true) => 1.0 - self.animation.progress(),
        };

        if openness > 0.0 {
            let track = env.background.lerp(self.track, openness);
            let x = width - ACTIVE_WIDTH;
            canvas.polygon(
                &[(x, 0.0), (width, 0.0), (width, height), (x, height)],
                Some(track),
                None,
            )?;
        }

        let thumb_width = IDLE_WIDTH + (ACTIVE_WIDTH - IDLE_WIDTH) * openness;
        let x = width - thumb_width;
        canvas.polygon(
            &[
                (x, top),
                (width, top),
                (width, top + self.thumb_height),
                (x, top + self.thumb_height),
            ],
            Some(self.thumb),
            None,
        )?;

        self.animation.advance();
        Ok(())
    }
}
