//! Pixel grids and their decomposition into regions.
//!
//! 1. **Loading** - decode an image file into a [`PixelGrid`]
//! 2. **Padding** - center on a power-of-two canvas filled with white
//! 3. **Partitioning** - split into a square [`RegionGrid`]
//! 4. **Luminance** - BT.709 weighted brightness per region

mod error;
mod grid;
mod load;
pub mod luminance;
mod padding;
mod partition;

pub use error::RasterError;
pub use grid::{PixelGrid, Region, Rgb};
pub use padding::next_power_of_two;
pub use partition::RegionGrid;
