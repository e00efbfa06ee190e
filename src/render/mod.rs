//! Rendering an image into a grid of glyphs.
//!
//! ```text
//! PixelGrid -> pad -> partition -> (cache) -> brightness -> Matcher -> CharGrid
//! ```

mod cache;
mod char_grid;
mod error;
mod pipeline;
mod resolution;

pub use cache::{Partition, PartitionCache};
pub use char_grid::CharGrid;
pub use error::RenderError;
pub use pipeline::RenderPipeline;
pub use resolution::{ResolutionBounds, DEFAULT_RESOLUTION};
