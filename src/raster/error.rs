//! Error types for pixel grid operations.

use std::path::PathBuf;

/// Errors that can occur while building, slicing or loading a pixel grid.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// Width or height was zero
    #[error("invalid grid dimensions {width}x{height}: both must be greater than 0")]
    InvalidDimensions { width: u32, height: u32 },

    /// Sample buffer does not match the declared dimensions
    #[error("expected {expected} samples for the declared dimensions, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// Requested rectangle reaches past the grid edge
    #[error(
        "region {width}x{height} at ({x}, {y}) exceeds grid bounds {grid_width}x{grid_height}"
    )]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        grid_width: u32,
        grid_height: u32,
    },

    /// Resolution is zero or larger than a grid dimension
    #[error("resolution {resolution} cannot partition a {width}x{height} grid")]
    InvalidResolution {
        resolution: u32,
        width: u32,
        height: u32,
    },

    /// Image file could not be opened or decoded
    #[error("failed to load image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
