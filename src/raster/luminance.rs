//! Perceptual luminance using the ITU-R BT.709 weights.
//!
//! The luminance of a sample is: Y = 0.2126*R + 0.7152*G + 0.0722*B
//!
//! Channel values are scaled to `[0, 1]` by dividing by 255, so a grid's
//! average luminance is also in `[0, 1]`.

use super::grid::Rgb;

/// Red channel weight.
pub const RED_WEIGHT: f64 = 0.2126;
/// Green channel weight.
pub const GREEN_WEIGHT: f64 = 0.7152;
/// Blue channel weight.
pub const BLUE_WEIGHT: f64 = 0.0722;

const MAX_CHANNEL: f64 = 255.0;

/// Weighted channel sum of a single sample, in `[0, 255]`.
#[inline]
pub fn weighted(rgb: Rgb) -> f64 {
    rgb.r as f64 * RED_WEIGHT + rgb.g as f64 * GREEN_WEIGHT + rgb.b as f64 * BLUE_WEIGHT
}

/// Average luminance of `samples`, in `[0, 1]`.
///
/// Returns 0 for an empty slice.
pub fn average(samples: &[Rgb]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&rgb| weighted(rgb)).sum();
    // The weights sum to 1 only up to rounding; keep white at exactly 1.
    (sum / (samples.len() as f64 * MAX_CHANNEL)).clamp(0.0, 1.0)
}
