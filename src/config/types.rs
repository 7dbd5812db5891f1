//! Configuration type definitions.

use crate::draw::{Behaviour, ColorSpec, RectMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Window settings used when a sketch does not choose its own.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WindowConfig {
    /// Window width in pixels (valid range: 50 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Window height in pixels (valid range: 50 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Target frame rate, 0 unlocks it (valid range: 0 - 240)
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            fps: default_fps(),
        }
    }
}

/// Drawing attributes every sketch starts with.
///
/// Sketches can change all of these at runtime; the values here are what
/// `setup` sees.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Fill color for closed shapes - a palette name, `[r, g, b]` or a gray level
    #[serde(default = "default_white")]
    pub fill: ColorSpec,

    /// Outline color for shapes and lines
    #[serde(default = "default_white")]
    pub stroke: ColorSpec,

    /// Outline width in pixels (valid range: 0.0 - 100.0)
    #[serde(default = "default_stroke_weight")]
    pub stroke_weight: f64,

    /// Window background, also used by menus with a window background
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Text color
    #[serde(default = "default_white")]
    pub text_color: ColorSpec,

    /// Text size in pixels (valid range: 4.0 - 200.0)
    #[serde(default = "default_text_size")]
    pub text_size: f64,

    /// Font family name for text rendering (e.g., "Sans", "Monospace", "JetBrains Mono")
    /// Falls back to the system default if the font is not available
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// How rectangle, square and ellipse anchors are read (corner, center)
    #[serde(default)]
    pub rect_mode: RectMode,

    /// End-of-frame behaviour of `translate` (reset, keep)
    #[serde(default)]
    pub translation_behaviour: Behaviour,

    /// End-of-frame behaviour of `rotate` (reset, keep)
    #[serde(default)]
    pub rotation_behaviour: Behaviour,

    /// End-of-frame behaviour of `scale` (reset, keep)
    #[serde(default)]
    pub scale_behaviour: Behaviour,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            fill: default_white(),
            stroke: default_white(),
            stroke_weight: default_stroke_weight(),
            background: default_background(),
            text_color: default_white(),
            text_size: default_text_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            rect_mode: RectMode::default(),
            translation_behaviour: Behaviour::default(),
            rotation_behaviour: Behaviour::default(),
            scale_behaviour: Behaviour::default(),
        }
    }
}

/// Widget defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WidgetsConfig {
    /// Frames a button must stay unpressed before it can fire again (valid range: 0 - 600)
    #[serde(default = "default_button_count")]
    pub button_count: u32,

    /// Fill used by buttons created without a color or outline
    #[serde(default = "default_button_color")]
    pub button_color: ColorSpec,

    /// Width of an expanded side menu in pixels (valid range: 50.0 - 1000.0)
    #[serde(default = "default_menu_width")]
    pub menu_width: f64,

    /// Duration of the menu slide animation in seconds (valid range: 0.0 - 2.0)
    #[serde(default = "default_animation_seconds")]
    pub menu_animation_seconds: f64,

    /// Duration of the scroll bar hover animation in seconds (valid range: 0.0 - 2.0)
    #[serde(default = "default_animation_seconds")]
    pub scrollbar_animation_seconds: f64,

    /// Scroll bar thumb color
    #[serde(default = "default_scrollbar_thumb")]
    pub scrollbar_thumb: ColorSpec,

    /// Scroll bar track color, shown while the bar is active
    #[serde(default = "default_scrollbar_track")]
    pub scrollbar_track: ColorSpec,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            button_count: default_button_count(),
            button_color: default_button_color(),
            menu_width: default_menu_width(),
            menu_animation_seconds: default_animation_seconds(),
            scrollbar_animation_seconds: default_animation_seconds(),
            scrollbar_thumb: default_scrollbar_thumb(),
            scrollbar_track: default_scrollbar_track(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers in the shared-memory pool (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Wait for the compositor's frame callback before presenting
    /// Set to false to present as soon as a frame is drawn
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// Where `save_frame` writes PNG files when no path is given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CaptureConfig {
    /// Directory for saved frames (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// File name template with chrono format specifiers, without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> i32 {
    600
}

fn default_height() -> i32 {
    600
}

fn default_title() -> String {
    "Phoenyx sketch".to_string()
}

fn default_fps() -> u32 {
    60
}

fn default_white() -> ColorSpec {
    ColorSpec::Gray(255)
}

fn default_stroke_weight() -> f64 {
    1.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Gray(51)
}

fn default_text_size() -> f64 {
    12.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_button_count() -> u32 {
    15
}

fn default_button_color() -> ColorSpec {
    ColorSpec::Gray(155)
}

fn default_menu_width() -> f64 {
    150.0
}

fn default_animation_seconds() -> f64 {
    0.2
}

fn default_scrollbar_thumb() -> ColorSpec {
    ColorSpec::Gray(155)
}

fn default_scrollbar_track() -> ColorSpec {
    ColorSpec::Gray(50)
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_save_directory() -> String {
    "~/Pictures/Phoenyx".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
