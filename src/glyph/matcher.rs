//! Brightness to glyph selection.

use super::error::MatchError;
use super::palette::Palette;

/// How a target brightness is mapped onto the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// Closest normalized brightness in either direction
    #[default]
    Nearest,
    /// Closest normalized brightness at or above the target
    AtLeast,
    /// Closest normalized brightness at or below the target
    AtMost,
}

impl RoundingPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            RoundingPolicy::Nearest => "nearest",
            RoundingPolicy::AtLeast => "up",
            RoundingPolicy::AtMost => "down",
        }
    }

    /// Parse a policy name. `abs` is accepted as an alias for `nearest`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nearest" | "abs" => Some(RoundingPolicy::Nearest),
            "up" => Some(RoundingPolicy::AtLeast),
            "down" => Some(RoundingPolicy::AtMost),
            _ => None,
        }
    }
}

/// Selects glyphs from a palette under a rounding policy.
///
/// Every lookup is a linear scan over the palette in ascending character
/// order; equally good candidates resolve to the smallest character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    policy: RoundingPolicy,
}

impl Matcher {
    pub fn new(policy: RoundingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RoundingPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RoundingPolicy) {
        self.policy = policy;
    }

    /// Glyph whose normalized brightness best matches `target`.
    ///
    /// Fails if the palette is not usable, or if a bounded policy finds no
    /// glyph on the required side of `target`.
    pub fn match_brightness(&self, palette: &Palette, target: f64) -> Result<char, MatchError> {
        let candidates = palette.normalized()?;

        let best = match self.policy {
            RoundingPolicy::Nearest => {
                pick(candidates.map(|(c, n)| (c, (n - target).abs())), |d, best| d < best)
            }
            RoundingPolicy::AtLeast => {
                pick(candidates.filter(|&(_, n)| n >= target), |n, best| n < best)
            }
            RoundingPolicy::AtMost => {
                pick(candidates.filter(|&(_, n)| n <= target), |n, best| n > best)
            }
        };

        best.ok_or(match self.policy {
            RoundingPolicy::AtMost => MatchError::NoGlyphAtMost { target },
            _ => MatchError::NoGlyphAtLeast { target },
        })
    }
}

/// First candidate that no later candidate strictly beats.
fn pick<I, F>(candidates: I, better: F) -> Option<char>
where
    I: Iterator<Item = (char, f64)>,
    F: Fn(f64, f64) -> bool,
{
    candidates
        .fold(None, |best: Option<(char, f64)>, (c, score)| match best {
            Some((_, best_score)) if !better(score, best_score) => best,
            _ => Some((c, score)),
        })
        .map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{GlyphBitmap, GlyphRasterizer, PaletteError};
    use std::sync::Arc;

    /// Ink count on a 4x4 grid equals the character's offset from 'a'.
    struct LinearInk;

    impl GlyphRasterizer for LinearInk {
        fn rasterize(&self, c: char) -> Option<GlyphBitmap> {
            let ink = (c as usize).checked_sub('a' as usize)?.min(16);
            GlyphBitmap::new(4, (0..16).map(|i| i < ink).collect())
        }
    }

    /// 'a' = 0.0, 'c' = 0.25, 'e' = 0.5, 'i' = 1.0
    fn palette() -> Palette {
        let mut palette = Palette::with_rasterizer(Arc::new(LinearInk));
        for c in ['a', 'c', 'e', 'i'] {
            palette.insert(c).unwrap();
        }
        palette
    }

    #[test]
    fn test_policy_names() {
        for policy in [
            RoundingPolicy::Nearest,
            RoundingPolicy::AtLeast,
            RoundingPolicy::AtMost,
        ] {
            assert_eq!(RoundingPolicy::from_name(policy.name()), Some(policy));
        }
        assert_eq!(RoundingPolicy::from_name("abs"), Some(RoundingPolicy::Nearest));
        assert_eq!(RoundingPolicy::from_name("sideways"), None);
    }

    #[test]
    fn test_nearest() {
        let m = Matcher::default();
        let p = palette();
        assert_eq!(m.policy(), RoundingPolicy::Nearest);
        assert_eq!(m.match_brightness(&p, 0.0), Ok('a'));
        assert_eq!(m.match_brightness(&p, 0.3), Ok('c'));
        assert_eq!(m.match_brightness(&p, 0.7), Ok('e'));
        assert_eq!(m.match_brightness(&p, 1.0), Ok('i'));
    }

    #[test]
    fn test_nearest_tie_prefers_smaller_char() {
        let m = Matcher::new(RoundingPolicy::Nearest);
        let p = palette();
        // 0.375 is exactly between 'c' (0.25) and 'e' (0.5)
        assert_eq!(m.match_brightness(&p, 0.375), Ok('c'));
        assert_eq!(m.match_brightness(&p, 0.125), Ok('a'));
    }

    #[test]
    fn test_nearest_identical_brightness_prefers_smaller_char() {
        let mut p = palette();
        // 'q' and 'r' both clamp to a solid grid
        p.remove('i');
        p.insert('r').unwrap();
        p.insert('q').unwrap();
        let m = Matcher::new(RoundingPolicy::Nearest);
        assert_eq!(m.match_brightness(&p, 1.0), Ok('q'));
    }

    #[test]
    fn test_at_least() {
        let m = Matcher::new(RoundingPolicy::AtLeast);
        let p = palette();
        assert_eq!(m.match_brightness(&p, 0.0), Ok('a'));
        assert_eq!(m.match_brightness(&p, 0.1), Ok('c'));
        assert_eq!(m.match_brightness(&p, 0.25), Ok('c'));
        assert_eq!(m.match_brightness(&p, 0.51), Ok('i'));
    }

    #[test]
    fn test_at_least_unmatched() {
        let m = Matcher::new(RoundingPolicy::AtLeast);
        assert_eq!(
            m.match_brightness(&palette(), 1.5),
            Err(MatchError::NoGlyphAtLeast { target: 1.5 })
        );
    }

    #[test]
    fn test_at_most() {
        let m = Matcher::new(RoundingPolicy::AtMost);
        let p = palette();
        assert_eq!(m.match_brightness(&p, 1.0), Ok('i'));
        assert_eq!(m.match_brightness(&p, 0.99), Ok('e'));
        assert_eq!(m.match_brightness(&p, 0.25), Ok('c'));
        assert_eq!(m.match_brightness(&p, 0.1), Ok('a'));
    }

    #[test]
    fn test_at_most_unmatched() {
        let m = Matcher::new(RoundingPolicy::AtMost);
        assert_eq!(
            m.match_brightness(&palette(), -0.5),
            Err(MatchError::NoGlyphAtMost { target: -0.5 })
        );
    }

    #[test]
    fn test_set_policy() {
        let mut m = Matcher::default();
        let p = palette();
        m.set_policy(RoundingPolicy::AtLeast);
        assert_eq!(m.match_brightness(&p, 0.3), Ok('e'));
        m.set_policy(RoundingPolicy::AtMost);
        assert_eq!(m.match_brightness(&p, 0.3), Ok('c'));
    }

    #[test]
    fn test_unusable_palette() {
        let mut p = palette();
        for c in ['a', 'c', 'e'] {
            p.remove(c);
        }
        assert_eq!(
            Matcher::default().match_brightness(&p, 0.5),
            Err(MatchError::Palette(PaletteError::TooFewGlyphs { size: 1 }))
        );
    }
}
