//! One iteration of the frame loop.

use super::{Renderer, Sketch, Trigger};
use crate::config::Action;
use crate::input::{KeyEvent, MouseButton};
use crate::widgets::{Animation, DrawEnv, Named};
use log::{debug, info, warn};

/// Frame rate assumed for animations while unlocked and not yet measured.
const FALLBACK_FPS: f64 = 60.0;

impl Renderer {
    /// Runs one frame: the sketch draws, then widgets, keys and events are
    /// processed, then collected triggers are handed back to the sketch.
    pub fn step<S: Sketch + ?Sized>(&mut self, sketch: &mut S) {
        self.clock.tick();
        self.frame_count += 1;

        sketch.draw(self);
        self.state.end_frame();

        if self.input.close_requested() {
            debug!("Close requested, stopping");
            self.running = false;
        }

        let key_events = self.input.take_key_events();
        let wheel = self.input.take_wheel();

        if self.bench_mode {
            self.keys.track_held(&key_events);
            self.handle_builtin_keys(&key_events);
            return;
        }

        let mut triggers = Vec::new();
        self.draw_widgets();
        self.update_widgets(wheel, &mut triggers);
        self.handle_builtin_keys(&key_events);
        triggers.extend(self.keys.dispatch(&key_events).into_iter().map(Trigger::Key));
        triggers.extend(
            self.events
                .poll(&self.input)
                .into_iter()
                .map(Trigger::Event),
        );

        for trigger in &triggers {
            sketch.on_trigger(self, trigger);
        }
    }

    /// Frames an animation of `seconds` should last at the current rate.
    pub(super) fn animation_ticks(&self, seconds: f64) -> u32 {
        let fps = if self.target_fps > 0 {
            self.target_fps as f64
        } else {
            match self.clock.fps() {
                measured if measured > 0.0 => measured,
                _ => FALLBACK_FPS,
            }
        };
        Animation::ticks_for(fps, seconds)
    }

    fn draw_widgets(&mut self) {
        let env = DrawEnv {
            canvas: &self.canvas,
            font: &self.font,
            background: self.background,
            width: self.width as f64,
            height: self.height as f64,
        };

        let mut failures = Vec::new();
        for button in self.buttons.iter().filter(|b| !b.is_hidden()) {
            if let Err(e) = button.draw(&env) {
                failures.push(format!("button '{}': {}", button.name(), e));
            }
        }
        for slider in self.sliders.iter().filter(|s| !s.is_hidden()) {
            if let Err(e) = slider.draw(&env) {
                failures.push(format!("slider '{}': {}", slider.name(), e));
            }
        }
        for menu in self.menus.iter_mut() {
            if let Err(e) = menu.draw(&env) {
                failures.push(format!("menu '{}': {}", menu.name(), e));
            }
        }
        if let Some(bar) = self.scrollbar.as_mut()
            && let Err(e) = bar.draw(&env)
        {
            failures.push(format!("scrollbar: {}", e));
        }

        for failure in failures {
            warn!("Drawing {} failed", failure);
        }
    }

    fn update_widgets(&mut self, wheel: f64, triggers: &mut Vec<Trigger>) {
        let pos = self.input.mouse_pos();
        let menu_ticks = self.animation_ticks(self.config.widgets.menu_animation_seconds);
        let scroll_ticks = self.animation_ticks(self.config.widgets.scrollbar_animation_seconds);

        if let Some(bar) = self.scrollbar.as_mut().filter(|bar| !bar.is_hidden()) {
            bar.on_wheel(wheel);
            bar.update_state(pos, scroll_ticks);
        }

        if !self.input.mouse_is_down(MouseButton::Left) {
            self.buttons.iter_mut().for_each(|button| button.click());
            self.menus.iter_mut().for_each(|menu| menu.click());
            if let Some(bar) = self.scrollbar.as_mut() {
                bar.release();
            }
            return;
        }

        for button in self.buttons.iter_mut() {
            if !button.is_hidden() && button.collide(pos) && button.check_click() {
                triggers.push(Trigger::Button(button.name().to_string()));
                button.reinit_click();
            }
        }

        for slider in self.sliders.iter_mut() {
            if !slider.is_hidden() && slider.collide(pos) {
                slider.set_value(pos);
            }
        }

        for menu in self.menus.iter_mut() {
            if menu.is_hidden() || !menu.check_click() {
                continue;
            }
            menu.update_state(pos, menu_ticks);
            if let Some(item) = menu.collide(pos).and_then(|i| menu.trigger(i)) {
                triggers.push(Trigger::MenuItem {
                    menu: menu.name().to_string(),
                    item: item.to_string(),
                });
            }
            menu.reinit_click();
        }

        if let Some(bar) = self.scrollbar.as_mut().filter(|bar| !bar.is_hidden()) {
            bar.drag(pos);
        }
    }

    /// Built-in shortcuts from the configuration. Keys bound with
    /// `new_keypress` shadow them.
    fn handle_builtin_keys(&mut self, events: &[KeyEvent]) {
        let modifiers = self.input.modifiers;
        let actions: Vec<Action> = events
            .iter()
            .filter_map(|event| match *event {
                KeyEvent::Pressed(key) if !self.keys.is_bound(key) => Some(key),
                _ => None,
            })
            .filter_map(|key| {
                self.builtin_keys
                    .iter()
                    .find(|(binding, _)| binding.matches_key(key, &modifiers))
                    .map(|(_, action)| *action)
            })
            .collect();

        for action in actions {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.quit();
            }
            Action::SaveFrame => {
                if let Err(e) = self.save_frame(None) {
                    warn!("Failed to save frame: {}", e);
                }
            }
            Action::ToggleBenchMode => {
                let enabled = !self.bench_mode;
                self.set_bench_mode(enabled);
            }
        }
    }
}
