//! The active set of output glyphs and their brightness scores.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::bitmap::{Font8x8Rasterizer, GlyphRasterizer};
use super::charset::{is_printable, CharSet, GlyphSelection};
use super::error::PaletteError;

static NEXT_PALETTE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a palette instance.
///
/// Every palette gets a fresh id when constructed; mutating a palette
/// keeps its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteId(u64);

impl PaletteId {
    fn next() -> Self {
        PaletteId(NEXT_PALETTE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A palette character with its raw and normalized brightness.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphEntry {
    ch: char,
    raw: f64,
    normalized: Option<f64>,
}

impl GlyphEntry {
    pub fn char(&self) -> char {
        self.ch
    }

    /// Ink fraction of the glyph bitmap, in `[0, 1]`.
    pub fn raw_brightness(&self) -> f64 {
        self.raw
    }

    /// Brightness rescaled so the palette's darkest glyph is 0 and its
    /// brightest is 1. `None` while the palette cannot be normalized.
    pub fn normalized_brightness(&self) -> Option<f64> {
        self.normalized
    }
}

/// Set of glyphs keyed by character.
///
/// Normalized brightness is recomputed over the whole palette after every
/// insertion or removal. A palette needs at least two glyphs with distinct
/// raw brightness before it can be matched against.
pub struct Palette {
    id: PaletteId,
    entries: BTreeMap<char, GlyphEntry>,
    rasterizer: Arc<dyn GlyphRasterizer>,
}

impl Palette {
    /// Empty palette using the built-in 8x8 font.
    pub fn new() -> Self {
        Self::with_rasterizer(Arc::new(Font8x8Rasterizer))
    }

    /// Empty palette using a custom rasterizer.
    pub fn with_rasterizer(rasterizer: Arc<dyn GlyphRasterizer>) -> Self {
        Self {
            id: PaletteId::next(),
            entries: BTreeMap::new(),
            rasterizer,
        }
    }

    /// Palette holding `chars`, rasterized with the built-in font.
    pub fn from_chars<I>(chars: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut palette = Self::new();
        palette.insert_all(chars)?;
        Ok(palette)
    }

    /// Palette seeded from a preset.
    pub fn from_charset(charset: CharSet) -> Result<Self, PaletteError> {
        Self::from_chars(charset.chars())
    }

    pub fn id(&self) -> PaletteId {
        self.id
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn get(&self, c: char) -> Option<&GlyphEntry> {
        self.entries.get(&c)
    }

    /// Entries in ascending character order.
    pub fn entries(&self) -> impl Iterator<Item = &GlyphEntry> {
        self.entries.values()
    }

    /// Characters in ascending order.
    pub fn chars(&self) -> Vec<char> {
        self.entries.keys().copied().collect()
    }

    /// Add `c`, or recompute it if already present.
    ///
    /// Fails with [`PaletteError::UnsupportedChar`] for anything outside
    /// printable ASCII, leaving the palette unchanged.
    pub fn insert(&mut self, c: char) -> Result<(), PaletteError> {
        self.insert_all([c])
    }

    /// Add every character of `selection` with a single renormalization.
    pub fn insert_selection(&mut self, selection: GlyphSelection) -> Result<(), PaletteError> {
        self.insert_all(selection.chars())
    }

    /// Remove `c` if present. Returns whether it was in the palette.
    pub fn remove(&mut self, c: char) -> bool {
        let removed = self.entries.remove(&c).is_some();
        self.refresh();
        removed
    }

    /// Remove every character of `selection`. Returns how many were present.
    pub fn remove_selection(&mut self, selection: GlyphSelection) -> usize {
        let removed = selection
            .chars()
            .filter(|c| self.entries.remove(c).is_some())
            .count();
        self.refresh();
        removed
    }

    /// Rescale every entry to `(raw - min) / (max - min)`.
    ///
    /// When the palette has fewer than two glyphs, or all glyphs share the
    /// same raw brightness, every normalized value is cleared and the
    /// reason is returned.
    pub fn renormalize(&mut self) -> Result<(), PaletteError> {
        let (min, max) = match self.raw_extremes() {
            Ok(bounds) => bounds,
            Err(err) => {
                for entry in self.entries.values_mut() {
                    entry.normalized = None;
                }
                return Err(err);
            }
        };

        let range = max - min;
        for entry in self.entries.values_mut() {
            entry.normalized = Some((entry.raw - min) / range);
        }
        Ok(())
    }

    /// Whether the palette can be matched against.
    pub fn check_usable(&self) -> Result<(), PaletteError> {
        self.raw_extremes().map(|_| ())
    }

    /// `(char, normalized brightness)` pairs in ascending character order.
    pub fn normalized(&self) -> Result<impl Iterator<Item = (char, f64)> + '_, PaletteError> {
        self.check_usable()?;
        Ok(self
            .entries
            .values()
            .filter_map(|e| e.normalized.map(|n| (e.ch, n))))
    }

    fn insert_all<I>(&mut self, chars: I) -> Result<(), PaletteError>
    where
        I: IntoIterator<Item = char>,
    {
        // Rasterize everything first so a bad character leaves no trace.
        let mut staged = Vec::new();
        for c in chars {
            if !is_printable(c) {
                return Err(PaletteError::UnsupportedChar(c));
            }
            let bitmap = self
                .rasterizer
                .rasterize(c)
                .ok_or(PaletteError::UnsupportedChar(c))?;
            staged.push(GlyphEntry {
                ch: c,
                raw: bitmap.ink_ratio(),
                normalized: None,
            });
        }

        for entry in staged {
            self.entries.insert(entry.ch, entry);
        }
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        match self.renormalize() {
            Ok(()) => log::debug!("palette {:?} renormalized over {} glyphs", self.id, self.len()),
            Err(err @ PaletteError::DegenerateBrightness { .. }) => {
                log::warn!("palette {:?}: {}", self.id, err)
            }
            Err(err) => log::debug!("palette {:?}: {}", self.id, err),
        }
    }

    fn raw_extremes(&self) -> Result<(f64, f64), PaletteError> {
        if self.entries.len() < 2 {
            return Err(PaletteError::TooFewGlyphs {
                size: self.entries.len(),
            });
        }

        let (min, max) = self
            .entries
            .values()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), e| {
                (lo.min(e.raw), hi.max(e.raw))
            });

        if max == min {
            return Err(PaletteError::DegenerateBrightness {
                size: self.entries.len(),
                brightness: min,
            });
        }
        Ok((min, max))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("id", &self.id)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
