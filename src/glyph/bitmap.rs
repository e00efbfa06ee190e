//! Fixed-size monochrome glyph bitmaps.

use font8x8::{UnicodeFonts, BASIC_FONTS};

/// Side length of every bitmap produced by [`Font8x8Rasterizer`].
pub const GLYPH_SIZE: usize = 8;

/// Square grid of ink cells for a single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    size: usize,
    cells: Vec<bool>,
}

impl GlyphBitmap {
    /// Build a `size` x `size` bitmap from row-major cells.
    ///
    /// Returns `None` if `size` is 0 or `cells` has the wrong length.
    pub fn new(size: usize, cells: Vec<bool>) -> Option<Self> {
        if size == 0 || cells.len() != size * size {
            return None;
        }
        Some(Self { size, cells })
    }

    /// Unpack 8 row bytes, least significant bit on the left.
    pub fn from_rows(rows: [u8; GLYPH_SIZE]) -> Self {
        let cells = rows
            .iter()
            .flat_map(|&row| (0..GLYPH_SIZE).map(move |bit| row & (1 << bit) != 0))
            .collect();
        Self {
            size: GLYPH_SIZE,
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at column `x`, row `y` is inked.
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[y * self.size + x]
    }

    /// Number of inked cells.
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fraction of inked cells, in `[0, 1]`.
    pub fn ink_ratio(&self) -> f64 {
        self.ink_count() as f64 / self.cells.len() as f64
    }
}

/// Turns a character into its bitmap.
///
/// Implementations must be deterministic and return the same bitmap size
/// for every character they support.
pub trait GlyphRasterizer: Send + Sync {
    /// Bitmap for `c`, or `None` if the character is not covered.
    fn rasterize(&self, c: char) -> Option<GlyphBitmap>;
}

/// Rasterizer backed by the public-domain 8x8 basic Latin font.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font8x8Rasterizer;

impl GlyphRasterizer for Font8x8Rasterizer {
    fn rasterize(&self, c: char) -> Option<GlyphBitmap> {
        BASIC_FONTS.get(c).map(GlyphBitmap::from_rows)
    }
}
