//! Side menu behind a hamburger icon.

use super::animation::{Animation, ClickGate};
use super::registry::Named;
use super::{DrawEnv, Visibility};
use crate::draw::{Color, ColorSpec};
use crate::error::{Result, SketchError};
use std::str::FromStr;

const ICON_SIZE: f64 = 30.0;
const ICON_MARGIN: f64 = 10.0;
const HEADER_HEIGHT: f64 = ICON_SIZE + 2.0 * ICON_MARGIN;
const TEXT_PADDING: f64 = 10.0;

/// Window edge a menu is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(format!("{} is not a valid menu side", s)),
        }
    }
}

/// What is painted behind an expanded menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuBackground {
    /// Nothing, items are drawn over the sketch
    None,
    /// The window background color
    #[default]
    Window,
    Color(ColorSpec),
}

/// Optional menu settings.
#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub side: Side,
    /// Panel height; `None` fits the items
    pub length: Option<f64>,
    pub background: MenuBackground,
    /// Icon and separator color
    pub color: ColorSpec,
    pub text_color: ColorSpec,
    pub text_size: f64,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            side: Side::Right,
            length: None,
            background: MenuBackground::Window,
            color: ColorSpec::Gray(255),
            text_color: ColorSpec::Gray(255),
            text_size: 16.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    name: String,
    side: Side,
    items: Vec<String>,
    length: f64,
    background: Option<Color>,
    window_background: bool,
    color: Color,
    text_color: Color,
    text_size: f64,
    width: f64,
    window: (f64, f64),
    expanded: bool,
    gate: ClickGate,
    animation: Animation,
    visibility: Visibility,
}

impl Named for Menu {
    const KIND: &'static str = "menu";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Menu {
    /// Creates a collapsed menu.
    ///
    /// `window` is the window size, `width` the expanded panel width and
    /// `count` the click debounce shared with buttons.
    pub fn new(
        name: &str,
        items: Vec<String>,
        options: MenuOptions,
        window: (f64, f64),
        width: f64,
        count: u32,
    ) -> Result<Self> {
        if options.text_size <= 0.0 {
            return Err(SketchError::invalid_widget(
                Self::KIND,
                name,
                format!("text size {} must be positive", options.text_size),
            ));
        }
        let item_height = options.text_size * 2.0;
        let length = match options.length {
            Some(length) if length <= HEADER_HEIGHT => {
                return Err(SketchError::invalid_widget(
                    Self::KIND,
                    name,
                    format!("length {} leaves no room for items", length),
                ));
            }
            Some(length) => length,
            None => (HEADER_HEIGHT + item_height * items.len() as f64).min(window.1),
        };

        let (background, window_background) = match &options.background {
            MenuBackground::None => (None, false),
            MenuBackground::Window => (None, true),
            MenuBackground::Color(spec) => (Some(spec.resolve()?), false),
        };

        Ok(Self {
            name: name.to_string(),
            side: options.side,
            items,
            length,
            background,
            window_background,
            color: options.color.resolve()?,
            text_color: options.text_color.resolve()?,
            text_size: options.text_size,
            width: width.min(window.0),
            window,
            expanded: false,
            gate: ClickGate::new(count),
            animation: Animation::default(),
            visibility: Visibility::default(),
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_playing(&self) -> bool {
        self.animation.is_playing()
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

    pub fn click(&mut self) {
        self.gate.click();
    }

    pub fn check_click(&self) -> bool {
        self.gate.check_click()
    }

    pub fn reinit_click(&mut self) {
        self.gate.reinit_click();
    }

    fn icon_origin(&self) -> (f64, f64) {
        match self.side {
            Side::Left => (ICON_MARGIN, ICON_MARGIN),
            Side::Right => (self.window.0 - ICON_MARGIN - ICON_SIZE, ICON_MARGIN),
        }
    }

    fn icon_hit(&self, (px, py): (f64, f64)) -> bool {
        let (x, y) = self.icon_origin();
        px >= x && px <= x + ICON_SIZE && py >= y && py <= y + ICON_SIZE
    }

    fn item_height(&self) -> f64 {
        self.text_size * 2.0
    }

    /// Left edge of the panel, `slide` being how far it is pushed off-screen.
    fn panel_x(&self, slide: f64) -> f64 {
        match self.side {
            Side::Left => -slide,
            Side::Right => self.window.0 - self.width + slide,
        }
    }

    /// Toggles expansion when the point is on the icon.
    ///
    /// `ticks` is the length of the slide animation in frames.
    pub fn update_state(&mut self, pos: (f64, f64), ticks: u32) {
        if self.icon_hit(pos) {
            self.expanded = !self.expanded;
            self.animation.start(ticks);
        }
    }

    /// Index of the item under the point, when fully expanded.
    pub fn collide(&self, (px, py): (f64, f64)) -> Option<usize> {
        if !self.expanded || self.animation.is_playing() {
            return None;
        }
        let x = self.panel_x(0.0);
        if px < x || px > x + self.width || py < HEADER_HEIGHT || py > self.length {
            return None;
        }
        let index = ((py - HEADER_HEIGHT) / self.item_height()) as usize;
        (index < self.items.len()).then_some(index)
    }

    /// Name of the item at `index`.
    pub fn trigger(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Draws the icon and, when open or sliding, the panel; advances the slide.
    pub fn draw(&mut self, env: &DrawEnv<'_>) -> Result<()> {
        if self.is_hidden() {
            return Ok(());
        }
        let canvas = env.canvas;

        let slide = if self.animation.is_playing() {
            let progress = self.animation.progress();
            let hidden_share = if self.expanded { 1.0 - progress } else { progress };
            Some(self.width * hidden_share)
        } else if self.expanded {
            Some(0.0)
        } else {
            None
        };

        if let Some(slide) = slide {
            let x = self.panel_x(slide);
            let panel = [
                (x, 0.0),
                (x + self.width, 0.0),
                (x + self.width, self.length),
                (x, self.length),
            ];
            let fill = self
                .background
                .or(self.window_background.then_some(env.background));
            canvas.polygon(&panel, fill, Some((self.color, 1.0)))?;

            let item_height = self.item_height();
            for (i, item) in self.items.iter().enumerate() {
                let top = HEADER_HEIGHT + i as f64 * item_height;
                if top + item_height > self.length {
                    break;
                }
                canvas.polyline(
                    &[(x, top), (x + self.width, top)],
                    false,
                    self.color,
                    1.0,
                    false,
                )?;
                let (_, h) = canvas.text_extent(item, self.text_size, env.font)?;
                canvas.text(
                    x + TEXT_PADDING,
                    top + (item_height - h) / 2.0,
                    item,
                    self.text_color,
                    self.text_size,
                    env.font,
                )?;
            }
        }

        let (ix, iy) = self.icon_origin();
        for row in 0..3 {
            let y = iy + 5.0 + row as f64 * 10.0;
            canvas.polyline(
                &[(ix + 3.0, y), (ix + ICON_SIZE - 3.0, y)],
                false,
                self.color,
                3.0,
                true,
            )?;
        }

        self.animation.advance();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::WHITE;

    fn menu(side: Side) -> Menu {
        Menu::new(
            "m",
            vec!["one".to_string(), "two".to_string()],
            MenuOptions {
                side,
                ..Default::default()
            },
            (400.0, 300.0),
            150.0,
            15,
        )
        .unwrap()
    }

    #[test]
    fn auto_length_fits_items() {
        let m = menu(Side::Right);
        assert_eq!(m.length, HEADER_HEIGHT + 2.0 * 32.0);
    }

    #[test]
    fn icon_toggles_expansion() {
        let mut m = menu(Side::Right);
        m.update_state((200.0, 20.0), 0);
        assert!(!m.is_expanded());
        m.update_state((375.0, 20.0), 0);
        assert!(m.is_expanded());
        assert!(m.is_playing());

        let mut left = menu(Side::Left);
        left.update_state((25.0, 25.0), 0);
        assert!(left.is_expanded());
    }

    #[test]
    fn items_hit_only_when_settled() {
        let mut m = menu(Side::Right);
        assert_eq!(m.collide((300.0, HEADER_HEIGHT + 5.0)), None);
        m.update_state((375.0, 20.0), 12);
        assert_eq!(m.collide((300.0, HEADER_HEIGHT + 5.0)), None);
        m.expanded = true;
        m.animation = Animation::default();
        assert_eq!(m.collide((300.0, HEADER_HEIGHT + 5.0)), Some(0));
        assert_eq!(m.collide((300.0, HEADER_HEIGHT + 40.0)), Some(1));
        assert_eq!(m.collide((100.0, HEADER_HEIGHT + 5.0)), None);
        assert_eq!(m.trigger(1), Some("two"));
        assert_eq!(m.trigger(2), None);
    }

    #[test]
    fn text_color_is_resolved() {
        let m = Menu::new(
            "m",
            Vec::new(),
            MenuOptions {
                text_color: "white".into(),
                ..Default::default()
            },
            (400.0, 300.0),
            150.0,
            15,
        )
        .unwrap();
        assert_eq!(m.text_color, WHITE);
    }

    #[test]
    fn too_short_length_is_rejected() {
        let err = Menu::new(
            "m",
            Vec::new(),
            MenuOptions {
                length: Some(10.0),
                ..Default::default()
            },
            (400.0, 300.0),
            150.0,
            15,
        )
        .unwrap_err();
        assert!(matches!(err, SketchError::InvalidWidget { kind: "menu", .. }));
    }
}
