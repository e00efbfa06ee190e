//! Splitting a grid into a square layout of regions.

use super::error::RasterError;
use super::grid::{PixelGrid, Region};

/// A `resolution` x `resolution` layout of regions, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGrid {
    resolution: u32,
    regions: Vec<Region>,
}

impl RegionGrid {
    /// Number of rows (and columns).
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Region at `row`, `col`.
    pub fn get(&self, row: u32, col: u32) -> Option<&Region> {
        if row >= self.resolution || col >= self.resolution {
            return None;
        }
        self.regions
            .get(row as usize * self.resolution as usize + col as usize)
    }

    /// Rows of regions, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Region]> {
        self.regions.chunks_exact(self.resolution as usize)
    }

    /// All regions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }
}

impl PixelGrid {
    /// Partition into `resolution` rows and `resolution` columns.
    ///
    /// Each span is `dimension / resolution` (truncated). The last row and
    /// column extend to the grid edge, so every sample lands in exactly
    /// one region. Fails when `resolution` is 0 or exceeds either
    /// dimension.
    pub fn partition(&self, resolution: u32) -> Result<RegionGrid, RasterError> {
        if resolution == 0 || resolution > self.width() || resolution > self.height() {
            return Err(RasterError::InvalidResolution {
                resolution,
                width: self.width(),
                height: self.height(),
            });
        }

        let span_w = self.width() / resolution;
        let span_h = self.height() / resolution;
        let last = resolution - 1;

        let mut regions = Vec::with_capacity(resolution as usize * resolution as usize);
        for row in 0..resolution {
            let y = row * span_h;
            let h = if row == last { self.height() - y } else { span_h };
            for col in 0..resolution {
                let x = col * span_w;
                let w = if col == last { self.width() - x } else { span_w };
                regions.push(self.extract_region(x, y, w, h)?);
            }
        }

        Ok(RegionGrid {
            resolution,
            regions,
        })
    }
}
