//! Error types for palette maintenance and glyph matching.

/// Errors raised by [`Palette`](super::Palette) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaletteError {
    /// Character outside printable ASCII (32-126)
    #[error("character {0:?} is not printable ASCII")]
    UnsupportedChar(char),

    /// Fewer than two glyphs, so brightness cannot be normalized
    #[error("palette has {size} glyph(s), at least 2 are required")]
    TooFewGlyphs { size: usize },

    /// Every glyph has the same raw brightness
    #[error("all {size} glyphs share raw brightness {brightness}, cannot normalize")]
    DegenerateBrightness { size: usize, brightness: f64 },
}

/// Errors raised when no glyph satisfies a rounding policy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    /// Palette is not usable for matching
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// Rounding up found no glyph at or above the target
    #[error("no glyph has normalized brightness >= {target}")]
    NoGlyphAtLeast { target: f64 },

    /// Rounding down found no glyph at or below the target
    #[error("no glyph has normalized brightness <= {target}")]
    NoGlyphAtMost { target: f64 },
}
