//! Drawing layer (Cairo-based).
//!
//! - [`Color`] / [`ColorSpec`]: colors and how sketches name them
//! - [`DrawState`] / [`StateStack`]: the attributes `push` and `pop` save
//! - [`Transform`]: translate / rotate / scale applied to sketch points
//! - [`Canvas`]: the persistent surface everything is drawn on

pub mod canvas;
pub mod color;
pub mod font;
pub mod pixels;
pub mod shape;
pub mod state;
pub mod transform;

pub use canvas::Canvas;
pub use color::{Color, ColorSpec};
pub use font::FontDescriptor;
pub use pixels::PixelBuffer;
pub use shape::{FinishedShape, ShapeBuilder};
pub use state::{DrawState, RectMode, StateStack};
pub use transform::{Behaviour, Transform};

pub use color::{
    BLACK, BLUE, DARK_GRAY, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW,
};

/// Deserializes a keyword enum through its `FromStr`, case-insensitively.
/// Unknown words warn and give the default instead of failing the whole file.
pub(crate) fn deserialize_keyword<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr<Err = String> + Default + std::fmt::Debug,
{
    let word = <String as serde::Deserialize>::deserialize(deserializer)?;
    Ok(word.parse().unwrap_or_else(|e| {
        let fallback = T::default();
        log::warn!("{}, using {:?}", e, fallback);
        fallback
    }))
}
