//! Glyph palette and brightness matching.
//!
//! Each palette character is rasterized to a fixed-size bitmap whose ink
//! fraction is its raw brightness. Raw values are rescaled across the
//! palette to `[0, 1]`, and a [`Matcher`] picks the glyph closest to a
//! target brightness under a [`RoundingPolicy`].

mod bitmap;
mod charset;
mod error;
mod matcher;
mod palette;

pub use bitmap::{Font8x8Rasterizer, GlyphBitmap, GlyphRasterizer, GLYPH_SIZE};
pub use charset::{
    is_printable, CharSet, GlyphSelection, SelectionParseError, DIGITS_CHARSET, MINIMAL_CHARSET,
    STANDARD_CHARSET,
};
pub use error::{MatchError, PaletteError};
pub use matcher::{Matcher, RoundingPolicy};
pub use palette::{GlyphEntry, Palette, PaletteId};
