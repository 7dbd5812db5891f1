//! Error type shared by the sketch API.

use thiserror::Error;

/// Errors reported by widget creation, key bindings, colors and canvas I/O.
///
/// Plain drawing calls never return these: they log a warning and leave the
/// drawing state untouched, so a sketch keeps running.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to write image: {0}")]
    CairoIo(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' is not a known color name")]
    UnknownColor(String),

    #[error("Invalid {kind} '{name}': {reason}")]
    InvalidWidget {
        kind: &'static str,
        name: String,
        reason: String,
    },

    #[error("There is already a {0} menu, try again by changing side")]
    MenuSideTaken(&'static str),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),

    #[error("'{0}' is already assigned to an action, try update_keypress instead")]
    DuplicateKeyBinding(String),

    #[error("'{0}' is not assigned to an action")]
    UnknownKeyBinding(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SketchError {
    pub(crate) fn invalid_widget(
        kind: &'static str,
        name: &str,
        reason: impl Into<String>,
    ) -> Self {
        SketchError::InvalidWidget {
            kind,
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = SketchError> = std::result::Result<T, E>;
