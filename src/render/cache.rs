//! Single-slot memo of the last padded and partitioned image.

use std::sync::Arc;

use crate::glyph::PaletteId;
use crate::raster::{PixelGrid, RegionGrid};

/// Output of padding and partitioning one image.
#[derive(Debug, Clone)]
pub struct Partition {
    pub padded: PixelGrid,
    pub regions: RegionGrid,
}

/// Identity of the inputs a partition was computed from.
#[derive(Debug, Clone)]
struct CacheKey {
    image: Arc<PixelGrid>,
    resolution: u32,
    palette: PaletteId,
}

impl CacheKey {
    fn matches(&self, image: &Arc<PixelGrid>, resolution: u32, palette: PaletteId) -> bool {
        Arc::ptr_eq(&self.image, image) && self.resolution == resolution && self.palette == palette
    }
}

/// Memoizes the most recent partition.
///
/// The key compares the image by pointer identity and the palette by
/// [`PaletteId`], never by content. Any key change replaces the slot
/// wholesale. Holding the image `Arc` keeps its address from being reused
/// while it is cached.
#[derive(Debug, Default)]
pub struct PartitionCache {
    slot: Option<(CacheKey, Arc<Partition>)>,
    computations: u64,
}

impl PartitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached partition for these inputs, or run `compute` and
    /// cache its result.
    ///
    /// An error from `compute` is returned as is and leaves the cache
    /// holding whatever it held before.
    pub fn get_or_compute<F, E>(
        &mut self,
        image: &Arc<PixelGrid>,
        resolution: u32,
        palette: PaletteId,
        compute: F,
    ) -> Result<Arc<Partition>, E>
    where
        F: FnOnce(&PixelGrid) -> Result<Partition, E>,
    {
        if let Some((key, partition)) = &self.slot {
            if key.matches(image, resolution, palette) {
                log::debug!("partition cache hit (resolution {})", resolution);
                return Ok(Arc::clone(partition));
            }
        }

        log::debug!("partition cache miss (resolution {})", resolution);
        let partition = Arc::new(compute(image.as_ref())?);
        self.computations += 1;
        self.slot = Some((
            CacheKey {
                image: Arc::clone(image),
                resolution,
                palette,
            },
            Arc::clone(&partition),
        ));
        Ok(partition)
    }

    /// Whether a call with these inputs would hit.
    pub fn is_cached(&self, image: &Arc<PixelGrid>, resolution: u32, palette: PaletteId) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|(key, _)| key.matches(image, resolution, palette))
    }

    /// Number of times `compute` has run successfully.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Drop the cached partition.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Palette;
    use crate::raster::{RasterError, Rgb};

    fn image() -> Arc<PixelGrid> {
        Arc::new(PixelGrid::filled(4, 4, Rgb::BLACK).unwrap())
    }

    fn partition(image: &PixelGrid, resolution: u32) -> Result<Partition, RasterError> {
        let padded = image.pad_to_power_of_two();
        let regions = padded.partition(resolution)?;
        Ok(Partition { padded, regions })
    }

    #[test]
    fn test_hit_on_same_inputs() {
        let mut cache = PartitionCache::new();
        let img = image();
        let palette = Palette::new();

        let first = cache
            .get_or_compute(&img, 2, palette.id(), |i| partition(i, 2))
            .unwrap();
        let second = cache
            .get_or_compute(&img, 2, palette.id(), |_| -> Result<Partition, RasterError> {
                panic!("should not recompute")
            })
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.computations(), 1);
        assert!(cache.is_cached(&img, 2, palette.id()));
    }

    #[test]
    fn test_equal_but_distinct_image_misses() {
        let mut cache = PartitionCache::new();
        let palette = Palette::new();
        let a = image();
        let b = image();
        assert_eq!(a, b);

        cache.get_or_compute(&a, 2, palette.id(), |i| partition(i, 2)).unwrap();
        cache.get_or_compute(&b, 2, palette.id(), |i| partition(i, 2)).unwrap();
        assert_eq!(cache.computations(), 2);
        assert!(!cache.is_cached(&a, 2, palette.id()));
    }

    #[test]
    fn test_resolution_and_palette_changes_miss() {
        let mut cache = PartitionCache::new();
        let img = image();
        let first = Palette::new();
        let second = Palette::new();

        cache.get_or_compute(&img, 2, first.id(), |i| partition(i, 2)).unwrap();
        cache.get_or_compute(&img, 4, first.id(), |i| partition(i, 4)).unwrap();
        cache.get_or_compute(&img, 4, second.id(), |i| partition(i, 4)).unwrap();
        assert_eq!(cache.computations(), 3);
        assert!(cache.is_cached(&img, 4, second.id()));
    }

    #[test]
    fn test_failed_compute_keeps_previous_slot() {
        let mut cache = PartitionCache::new();
        let img = image();
        let palette = Palette::new();

        cache.get_or_compute(&img, 2, palette.id(), |i| partition(i, 2)).unwrap();
        let err = cache.get_or_compute(&img, 8, palette.id(), |i| partition(i, 8));
        assert!(matches!(err, Err(RasterError::InvalidResolution { .. })));
        assert_eq!(cache.computations(), 1);
        assert!(cache.is_cached(&img, 2, palette.id()));
    }

    #[test]
    fn test_clear() {
        let mut cache = PartitionCache::new();
        let img = image();
        let palette = Palette::new();
        cache.get_or_compute(&img, 1, palette.id(), |i| partition(i, 1)).unwrap();
        cache.clear();
        assert!(!cache.is_cached(&img, 1, palette.id()));
    }
}
