//! Widget creation and lookup.

use super::Renderer;
use crate::config::Config;
use crate::error::{Result, SketchError};
use crate::widgets::{
    Button, ButtonOptions, Menu, MenuOptions, ScrollBar, Slider, SliderOptions,
};
use log::warn;

impl Renderer {
    fn window_size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    // ------------------------------------------------------------------
    // Buttons
    // ------------------------------------------------------------------

    /// Creates a button with its top-left corner at `position`.
    pub fn create_button(
        &mut self,
        name: &str,
        position: (f64, f64),
        options: ButtonOptions,
    ) -> Result<&mut Button> {
        let button = Button::new(
            name,
            position,
            options,
            self.config.widgets.button_count,
            self.config.button_color(),
        )?;
        Ok(self.buttons.add(button))
    }

    pub fn get_button(&self, name: &str) -> Option<&Button> {
        self.buttons.get(name)
    }

    pub fn button_mut(&mut self, name: &str) -> Option<&mut Button> {
        self.buttons.get_mut(name)
    }

    pub fn kill_button(&mut self, name: &str) -> bool {
        self.buttons.kill(name)
    }

    pub fn pop_button(&mut self, name: &str) -> Option<Button> {
        self.buttons.pop(name)
    }

    // ------------------------------------------------------------------
    // Sliders
    // ------------------------------------------------------------------

    /// Creates a slider whose bar starts at `position`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_slider(
        &mut self,
        name: &str,
        position: (f64, f64),
        min: f64,
        max: f64,
        value: f64,
        incr: i32,
        options: SliderOptions,
    ) -> Result<&mut Slider> {
        let slider = Slider::new(name, position, min, max, value, incr, options)?;
        Ok(self.sliders.add(slider))
    }

    pub fn get_slider(&self, name: &str) -> Option<&Slider> {
        self.sliders.get(name)
    }

    pub fn slider_mut(&mut self, name: &str) -> Option<&mut Slider> {
        self.sliders.get_mut(name)
    }

    pub fn kill_slider(&mut self, name: &str) -> bool {
        self.sliders.kill(name)
    }

    pub fn pop_slider(&mut self, name: &str) -> Option<Slider> {
        self.sliders.pop(name)
    }

    pub fn slider_value(&self, name: &str) -> Option<f64> {
        self.sliders.get(name).map(Slider::value)
    }

    // ------------------------------------------------------------------
    // Menus
    // ------------------------------------------------------------------

    /// Creates a collapsed side menu. Each side holds at most one menu.
    pub fn create_menu(
        &mut self,
        name: &str,
        items: &[&str],
        options: MenuOptions,
    ) -> Result<&mut Menu> {
        if self.menus.iter().any(|menu| menu.side() == options.side) {
            return Err(SketchError::MenuSideTaken(options.side.as_str()));
        }
        let menu = Menu::new(
            name,
            items.iter().map(|item| item.to_string()).collect(),
            options,
            self.window_size(),
            self.config.widgets.menu_width,
            self.config.widgets.button_count,
        )?;
        Ok(self.menus.add(menu))
    }

    pub fn get_menu(&self, name: &str) -> Option<&Menu> {
        self.menus.get(name)
    }

    pub fn menu_mut(&mut self, name: &str) -> Option<&mut Menu> {
        self.menus.get_mut(name)
    }

    pub fn kill_menu(&mut self, name: &str) -> bool {
        self.menus.kill(name)
    }

    pub fn pop_menu(&mut self, name: &str) -> Option<Menu> {
        self.menus.pop(name)
    }

    // ------------------------------------------------------------------
    // Scroll bar
    // ------------------------------------------------------------------

    /// Creates the window's vertical scroll bar over `range`, replacing any previous one.
    pub fn create_scrollbar(&mut self, range: (f64, f64)) -> Result<&mut ScrollBar> {
        let widgets = &self.config.widgets;
        let bar = ScrollBar::new(
            range,
            self.window_size(),
            Config::color_or_white(&widgets.scrollbar_thumb, "scrollbar thumb"),
            Config::color_or_white(&widgets.scrollbar_track, "scrollbar track"),
        )?;
        if self.scrollbar.is_some() {
            warn!("a scrollbar already exists, replacing it");
        }
        Ok(self.scrollbar.insert(bar))
    }

    pub fn scrollbar(&self) -> Option<&ScrollBar> {
        self.scrollbar.as_ref()
    }

    pub fn scrollbar_mut(&mut self) -> Option<&mut ScrollBar> {
        self.scrollbar.as_mut()
    }

    pub fn kill_scrollbar(&mut self) -> bool {
        if self.scrollbar.take().is_none() {
            warn!("no scrollbar was found");
            return false;
        }
        true
    }

    /// Current scroll position, 0 without a scroll bar.
    pub fn scroll_offset(&self) -> f64 {
        self.scrollbar.as_ref().map_or(0.0, ScrollBar::value)
    }
}
