//! Image to character grid rendering.

use std::sync::Arc;

use super::cache::{Partition, PartitionCache};
use super::char_grid::CharGrid;
use super::error::RenderError;
use crate::glyph::{Matcher, Palette, RoundingPolicy};
use crate::raster::{PixelGrid, RasterError};

/// Pads, partitions and matches an image against a palette.
///
/// Owns the partition cache, so repeated renders of the same image
/// instance at the same resolution with the same palette instance skip
/// padding and partitioning.
#[derive(Debug, Default)]
pub struct RenderPipeline {
    cache: PartitionCache,
    matcher: Matcher,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RoundingPolicy) -> Self {
        Self {
            cache: PartitionCache::new(),
            matcher: Matcher::new(policy),
        }
    }

    pub fn policy(&self) -> RoundingPolicy {
        self.matcher.policy()
    }

    /// Change the rounding policy. Cached partitions stay valid.
    pub fn set_policy(&mut self, policy: RoundingPolicy) {
        self.matcher.set_policy(policy);
    }

    pub fn cache(&self) -> &PartitionCache {
        &self.cache
    }

    /// Render `image` as a `resolution` x `resolution` character grid.
    ///
    /// The palette must hold at least two glyphs with distinct brightness.
    /// Any failure leaves the cache as it was.
    pub fn render(
        &mut self,
        image: &Arc<PixelGrid>,
        resolution: u32,
        palette: &Palette,
    ) -> Result<CharGrid, RenderError> {
        palette.check_usable()?;

        let partition = self
            .cache
            .get_or_compute(image, resolution, palette.id(), |source| {
                let padded = source.pad_to_power_of_two();
                let regions = padded.partition(resolution)?;
                Ok::<_, RasterError>(Partition { padded, regions })
            })?;

        // A usable palette spans [0, 1] and region brightness is clamped to
        // [0, 1], so every policy finds a glyph from here on.
        let mut rows = Vec::with_capacity(resolution as usize);
        for regions in partition.regions.rows() {
            let row = regions
                .iter()
                .map(|region| self.matcher.match_brightness(palette, region.brightness()))
                .collect::<Result<Vec<char>, _>>()?;
            rows.push(row);
        }

        log::trace!(
            "rendered {}x{} image at resolution {} with {} glyphs",
            image.width(),
            image.height(),
            resolution,
            palette.len()
        );
        Ok(CharGrid::new(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{GlyphBitmap, GlyphRasterizer, PaletteError};
    use crate::raster::Rgb;

    /// Ink count on a 4x4 grid equals the character's offset from 'a'.
    struct LinearInk;

    impl GlyphRasterizer for LinearInk {
        fn rasterize(&self, c: char) -> Option<GlyphBitmap> {
            let ink = (c as usize).checked_sub('a' as usize)?.min(16);
            GlyphBitmap::new(4, (0..16).map(|i| i < ink).collect())
        }
    }

    /// 'a' = 0.0, 'e' = 0.5, 'i' = 1.0
    fn palette() -> Palette {
        let mut palette = Palette::with_rasterizer(Arc::new(LinearInk));
        for c in ['a', 'e', 'i'] {
            palette.insert(c).unwrap();
        }
        palette
    }

    fn quadrants() -> Arc<PixelGrid> {
        // Top-left black, everything else white
        Arc::new(
            PixelGrid::from_fn(4, 4, |x, y| {
                if x < 2 && y < 2 {
                    Rgb::BLACK
                } else {
                    Rgb::WHITE
                }
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_render_quadrants() {
        let mut pipeline = RenderPipeline::new();
        let grid = pipeline.render(&quadrants(), 2, &palette()).unwrap();
        assert_eq!(grid.rows(), &[vec!['a', 'i'], vec!['i', 'i']]);
    }

    #[test]
    fn test_render_uses_padding() {
        // 3x3 black pads to 4x4 with a white right column and bottom row
        let image = Arc::new(PixelGrid::filled(3, 3, Rgb::BLACK).unwrap());
        let mut pipeline = RenderPipeline::new();
        let p = palette();
        let grid = pipeline.render(&image, 2, &p).unwrap();
        assert_eq!(grid.get(0, 0), Some('a'));
        // Off-diagonal quadrants are half white
        assert_eq!(grid.get(0, 1), Some('e'));
        assert_eq!(grid.get(1, 0), Some('e'));

        // Bottom-right quadrant is 3 white of 4 samples
        pipeline.set_policy(RoundingPolicy::AtLeast);
        let grid = pipeline.render(&image, 2, &p).unwrap();
        assert_eq!(grid.get(1, 1), Some('i'));
    }

    #[test]
    fn test_render_policy() {
        let image = Arc::new(PixelGrid::filled(2, 2, Rgb::gray(50)).unwrap());
        let p = palette();
        let mut pipeline = RenderPipeline::new();
        assert_eq!(pipeline.render(&image, 1, &p).unwrap().get(0, 0), Some('a'));
        pipeline.set_policy(RoundingPolicy::AtLeast);
        assert_eq!(pipeline.policy(), RoundingPolicy::AtLeast);
        assert_eq!(pipeline.render(&image, 1, &p).unwrap().get(0, 0), Some('e'));
        // Policy changes reuse the cached partition
        assert_eq!(pipeline.cache().computations(), 1);
    }

    #[test]
    fn test_render_caches_partition() {
        let image = quadrants();
        let p = palette();
        let mut pipeline = RenderPipeline::new();
        let first = pipeline.render(&image, 2, &p).unwrap();
        let second = pipeline.render(&image, 2, &p).unwrap();
        assert_eq!(first, second);
        assert_eq!(pipeline.cache().computations(), 1);

        pipeline.render(&image, 4, &p).unwrap();
        assert_eq!(pipeline.cache().computations(), 2);
    }

    #[test]
    fn test_render_rejects_small_palette() {
        let mut p = palette();
        p.remove('a');
        p.remove('e');
        let mut pipeline = RenderPipeline::new();
        let err = pipeline.render(&quadrants(), 2, &p).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Palette(PaletteError::TooFewGlyphs { size: 1 })
        ));
        assert_eq!(pipeline.cache().computations(), 0);
    }

    #[test]
    fn test_render_rejects_bad_resolution() {
        let image = quadrants();
        let p = palette();
        let mut pipeline = RenderPipeline::new();
        pipeline.render(&image, 2, &p).unwrap();

        assert!(matches!(
            pipeline.render(&image, 0, &p),
            Err(RenderError::Raster(RasterError::InvalidResolution { .. }))
        ));
        assert!(matches!(
            pipeline.render(&image, 5, &p),
            Err(RenderError::Raster(RasterError::InvalidResolution { .. }))
        ));
        // Earlier partition still cached
        assert!(pipeline.cache().is_cached(&image, 2, p.id()));
    }
}
