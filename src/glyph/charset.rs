//! Character set presets and glyph selections.

use std::fmt;
use std::str::FromStr;

/// First printable ASCII character (space).
pub const FIRST_PRINTABLE: char = ' ';
/// Last printable ASCII character (tilde).
pub const LAST_PRINTABLE: char = '~';

/// Decimal digits, the default palette.
pub const DIGITS_CHARSET: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Standard ASCII density ramp (10 levels).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Minimal character set (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Whether `c` is in the printable ASCII range 32-126.
pub fn is_printable(c: char) -> bool {
    (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&c)
}

/// Preset used to seed a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Digits 0-9
    #[default]
    Digits,
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
    /// Every printable ASCII character
    Printable,
}

impl CharSet {
    /// Characters in this preset.
    pub fn chars(&self) -> Vec<char> {
        match self {
            CharSet::Digits => DIGITS_CHARSET.to_vec(),
            CharSet::Standard => STANDARD_CHARSET.to_vec(),
            CharSet::Minimal => MINIMAL_CHARSET.to_vec(),
            CharSet::Printable => (FIRST_PRINTABLE..=LAST_PRINTABLE).collect(),
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Digits => "digits",
            CharSet::Standard => "standard",
            CharSet::Minimal => "minimal",
            CharSet::Printable => "printable",
        }
    }

    /// Look up a preset by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "digits" => Some(CharSet::Digits),
            "standard" => Some(CharSet::Standard),
            "minimal" => Some(CharSet::Minimal),
            "printable" => Some(CharSet::Printable),
            _ => None,
        }
    }
}

/// A set of characters to add to or remove from a palette.
///
/// Parsed from `all`, `space`, a single character, or an inclusive range
/// written `a-z`. Reversed ranges (`z-a`) are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSelection {
    Single(char),
    Range(char, char),
    All,
}

impl GlyphSelection {
    /// Characters covered by this selection, in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        let (first, last) = match *self {
            GlyphSelection::Single(c) => (c, c),
            GlyphSelection::Range(a, b) => (a, b),
            GlyphSelection::All => (FIRST_PRINTABLE, LAST_PRINTABLE),
        };
        first..=last
    }
}

/// Error returned when a selection string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid glyph selection '{0}': expected a character, a range like a-z, 'space' or 'all'")]
pub struct SelectionParseError(pub String);

impl FromStr for GlyphSelection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => return Ok(GlyphSelection::All),
            "space" => return Ok(GlyphSelection::Single(' ')),
            _ => {}
        }

        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            [c] => Ok(GlyphSelection::Single(*c)),
            [a, '-', b] => Ok(GlyphSelection::Range(*a.min(b), *a.max(b))),
            _ => Err(SelectionParseError(s.to_string())),
        }
    }
}

impl fmt::Display for GlyphSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphSelection::Single(' ') => write!(f, "space"),
            GlyphSelection::Single(c) => write!(f, "{}", c),
            GlyphSelection::Range(a, b) => write!(f, "{}-{}", a, b),
            GlyphSelection::All => write!(f, "all"),
        }
    }
}
