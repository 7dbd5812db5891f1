//! Configuration file support for phoenyx.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/phoenyx/config.toml`. Settings include window defaults,
//! the initial drawing state, widget defaults, buffering and built-in keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    CaptureConfig, DrawingConfig, PerformanceConfig, WidgetsConfig, WindowConfig,
};

use crate::draw::{Color, DARK_GRAY, FontDescriptor, WHITE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [window]
/// width = 800
/// height = 600
/// fps = 60
///
/// [drawing]
/// fill = "orange"
/// stroke = [255, 255, 255]
/// background = 51
/// rect_mode = "center"
///
/// [widgets]
/// button_count = 15
///
/// [keybindings]
/// quit = ["Escape", "Ctrl+Q"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Window size, title and frame rate
    #[serde(default)]
    pub window: WindowConfig,

    /// Initial drawing state
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Widget defaults
    #[serde(default)]
    pub widgets: WidgetsConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Where saved frames go
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Built-in keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `window.width` / `window.height`: 50 - 8192
    /// - `window.fps`: 0 - 240
    /// - `drawing.stroke_weight`: 0.0 - 100.0
    /// - `drawing.text_size`: 4.0 - 200.0
    /// - `widgets.button_count`: 0 - 600
    /// - `widgets.menu_width`: 50.0 - 1000.0
    /// - animation durations: 0.0 - 2.0
    /// - `buffer_count`: 2 - 4
    pub fn validate_and_clamp(&mut self) {
        if !(50..=8192).contains(&self.window.width) {
            warn!(
                "Invalid window width {}, clamping to 50-8192 range",
                self.window.width
            );
            self.window.width = self.window.width.clamp(50, 8192);
        }

        if !(50..=8192).contains(&self.window.height) {
            warn!(
                "Invalid window height {}, clamping to 50-8192 range",
                self.window.height
            );
            self.window.height = self.window.height.clamp(50, 8192);
        }

        if self.window.fps > 240 {
            warn!("Invalid fps {}, clamping to 0-240 range", self.window.fps);
            self.window.fps = 240;
        }

        if !(0.0..=100.0).contains(&self.drawing.stroke_weight) {
            warn!(
                "Invalid stroke_weight {:.1}, clamping to 0.0-100.0 range",
                self.drawing.stroke_weight
            );
            self.drawing.stroke_weight = self.drawing.stroke_weight.clamp(0.0, 100.0);
        }

        if !(4.0..=200.0).contains(&self.drawing.text_size) {
            warn!(
                "Invalid text_size {:.1}, clamping to 4.0-200.0 range",
                self.drawing.text_size
            );
            self.drawing.text_size = self.drawing.text_size.clamp(4.0, 200.0);
        }

        if self.widgets.button_count > 600 {
            warn!(
                "Invalid button_count {}, clamping to 0-600 range",
                self.widgets.button_count
            );
            self.widgets.button_count = 600;
        }

        if !(50.0..=1000.0).contains(&self.widgets.menu_width) {
            warn!(
                "Invalid menu_width {:.1}, clamping to 50.0-1000.0 range",
                self.widgets.menu_width
            );
            self.widgets.menu_width = self.widgets.menu_width.clamp(50.0, 1000.0);
        }

        for (name, seconds) in [
            ("menu_animation_seconds", &mut self.widgets.menu_animation_seconds),
            (
                "scrollbar_animation_seconds",
                &mut self.widgets.scrollbar_animation_seconds,
            ),
        ] {
            if !(0.0..=2.0).contains(&*seconds) {
                warn!("Invalid {} {:.2}, clamping to 0.0-2.0 range", name, seconds);
                *seconds = seconds.clamp(0.0, 2.0);
            }
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if let Err(e) = self.keybindings.build_action_map() {
            warn!("{}, using default keybindings", e);
            self.keybindings = KeybindingsConfig::default();
        }
    }

    /// Background color, dark gray when the configured one cannot be resolved.
    pub fn background_color(&self) -> Color {
        self.drawing.background.resolve().unwrap_or_else(|e| {
            warn!("{}, using default background", e);
            DARK_GRAY
        })
    }

    /// Fill used by buttons created without a color or outline.
    pub fn button_color(&self) -> Color {
        self.widgets.button_color.resolve().unwrap_or_else(|e| {
            warn!("{}, using default button color", e);
            Color::gray8(155)
        })
    }

    /// Font face from the `[drawing]` section.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
        )
    }

    /// Resolves a configured color, falling back to white.
    pub(crate) fn color_or_white(spec: &crate::draw::ColorSpec, what: &str) -> Color {
        spec.resolve().unwrap_or_else(|e| {
            warn!("{}, {} defaults to white", e, what);
            WHITE
        })
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/phoenyx/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("phoenyx");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to `~/.config/phoenyx/config.toml`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(Config);
        serde_json::to_value(schema).unwrap_or_default()
    }
}
