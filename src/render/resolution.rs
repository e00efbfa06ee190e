//! Limits on how finely an image may be partitioned.

use super::error::RenderError;
use crate::raster::PixelGrid;

/// Resolution used when nothing else is configured.
pub const DEFAULT_RESOLUTION: u32 = 2;

/// Allowed resolutions for a given image.
///
/// The upper bound is one glyph per pixel column; the lower bound keeps at
/// least `width / height` glyphs per row for wide images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionBounds {
    min: u32,
    max: u32,
}

impl ResolutionBounds {
    pub fn for_image(image: &PixelGrid) -> Self {
        Self {
            min: (image.width() / image.height()).max(1),
            max: image.width(),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, resolution: u32) -> bool {
        (self.min..=self.max).contains(&resolution)
    }

    /// Returns `resolution` if it is within bounds.
    pub fn check(&self, resolution: u32) -> Result<u32, RenderError> {
        if self.contains(resolution) {
            Ok(resolution)
        } else {
            Err(RenderError::ResolutionOutOfBounds {
                resolution,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Twice `resolution`, if that stays within bounds.
    pub fn doubled(&self, resolution: u32) -> Option<u32> {
        resolution
            .checked_mul(2)
            .filter(|&r| r <= self.max)
    }

    /// Half of `resolution`, if that stays within bounds.
    pub fn halved(&self, resolution: u32) -> Option<u32> {
        // Compare before truncating so an odd resolution cannot drop below min.
        if resolution as f64 / 2.0 >= self.min as f64 {
            Some(resolution / 2)
        } else {
            None
        }
    }
}
