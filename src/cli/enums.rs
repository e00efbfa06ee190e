//! CLI enum types for character set and rounding options.

use clap::ValueEnum;

use asciify::glyph::{CharSet, RoundingPolicy};

/// Character set the palette starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Digits,
    Standard,
    Minimal,
    Printable,
}

impl From<CharacterSet> for CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Digits => CharSet::Digits,
            CharacterSet::Standard => CharSet::Standard,
            CharacterSet::Minimal => CharSet::Minimal,
            CharacterSet::Printable => CharSet::Printable,
        }
    }
}

/// How region brightness is rounded to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Rounding {
    /// Closest glyph in either direction
    #[default]
    Nearest,
    /// Closest glyph at or above the region brightness
    Up,
    /// Closest glyph at or below the region brightness
    Down,
}

impl From<Rounding> for RoundingPolicy {
    fn from(r: Rounding) -> Self {
        match r {
            Rounding::Nearest => RoundingPolicy::Nearest,
            Rounding::Up => RoundingPolicy::AtLeast,
            Rounding::Down => RoundingPolicy::AtMost,
        }
    }
}
