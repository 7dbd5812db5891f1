//! Click gating and short tick-based animations shared by widgets.

/// Debounce for mouse-held widgets.
///
/// A widget fires, then must see `count` frames with the left button up
/// before it can fire again.
#[derive(Debug, Clone)]
pub struct ClickGate {
    count: u32,
    counter: u32,
}

impl ClickGate {
    /// Gate that is ready to fire immediately.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            counter: count,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// One frame with the button released.
    pub fn click(&mut self) {
        self.counter = self.counter.saturating_add(1).min(self.count);
    }

    pub fn check_click(&self) -> bool {
        self.counter >= self.count
    }

    /// Closes the gate after firing.
    pub fn reinit_click(&mut self) {
        self.counter = 0;
    }
}

/// Frame-counted animation.
#[derive(Debug, Clone)]
pub struct Animation {
    tick_count: u32,
    max_ticks: u32,
    playing: bool,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            tick_count: 1,
            max_ticks: 0,
            playing: false,
        }
    }
}

impl Animation {
    /// Number of frames an animation of `seconds` lasts at `fps`.
    pub fn ticks_for(fps: f64, seconds: f64) -> u32 {
        (fps * seconds).round().max(0.0) as u32
    }

    pub fn start(&mut self, max_ticks: u32) {
        self.tick_count = 1;
        self.max_ticks = max_ticks;
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Progress from 0.0 to 1.0 of the running animation.
    pub fn progress(&self) -> f64 {
        if self.max_ticks == 0 {
            return 1.0;
        }
        (self.tick_count as f64 / self.max_ticks as f64).clamp(0.0, 1.0)
    }

    /// Advances one frame, stopping on the last tick.
    pub fn advance(&mut self) {
        if !self.playing {
            return;
        }
        self.tick_count += 1;
        if self.tick_count + 1 >= self.max_ticks {
            self.tick_count = 1;
            self.max_ticks = 0;
            self.playing = false;
        }
    }
}
