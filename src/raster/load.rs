//! Decoding image files into pixel grids.

use std::path::Path;

use super::error::RasterError;
use super::grid::PixelGrid;

impl PixelGrid {
    /// Decode the image at `path` into an RGB grid.
    ///
    /// Any alpha channel is dropped. Open and decode failures are returned
    /// as [`RasterError::Decode`] with the underlying error attached.
    pub fn load(path: impl AsRef<Path>) -> Result<PixelGrid, RasterError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| RasterError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        log::debug!("loaded {} ({}x{})", path.display(), width, height);
        PixelGrid::from_rgb_bytes(width, height, rgb.as_raw())
    }
}
