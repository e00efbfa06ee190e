//! Error types for rendering.

use crate::glyph::{MatchError, PaletteError};
use crate::raster::RasterError;

/// Errors that can end a render call.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Image could not be loaded, padded or partitioned
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// Palette cannot be matched against
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// No glyph satisfied the rounding policy
    #[error(transparent)]
    Match(#[from] MatchError),

    /// Resolution outside what the image supports
    #[error("resolution {resolution} is out of bounds for this image (allowed {min}..={max})")]
    ResolutionOutOfBounds { resolution: u32, min: u32, max: u32 },
}
