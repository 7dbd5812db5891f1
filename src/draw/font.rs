//! Text face used by `text` and widget labels.

/// Family, weight and style of the text face.
///
/// The size lives on the drawing state, since sketches change it far more
/// often than the face.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Family name, e.g. "Sans" or "Monospace"
    pub family: String,
    /// "normal", "bold", "light", ...
    pub weight: String,
    /// "normal", "italic" or "oblique"
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans", "normal", "normal")
    }
}

impl FontDescriptor {
    pub fn new(
        family: impl Into<String>,
        weight: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
        }
    }

    /// Pango description string such as "Sans Italic Bold 24px".
    ///
    /// Sizes are pixels and never below one.
    pub fn to_pango_string(&self, size: f64) -> String {
        let modifiers = [&self.style, &self.weight]
            .into_iter()
            .filter(|word| !word.eq_ignore_ascii_case("normal"))
            .map(|word| title_case(word));

        std::iter::once(self.family.clone())
            .chain(modifiers)
            .chain(std::iter::once(format!(
                "{}px",
                size.round().max(1.0) as i32
            )))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn description(&self, size: f64) -> pango::FontDescription {
        pango::FontDescription::from_string(&self.to_pango_string(size))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
