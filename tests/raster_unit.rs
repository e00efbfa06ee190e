//! Unit tests for pixel grids: padding, partitioning and brightness.

use asciify::raster::*;

fn gradient(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| Rgb::gray(((x + y) % 256) as u8)).unwrap()
}

// ==================== Padding Tests ====================

#[test]
fn test_next_power_of_two() {
    assert_eq!(next_power_of_two(-3), 1);
    assert_eq!(next_power_of_two(0), 1);
    assert_eq!(next_power_of_two(1), 1);
    assert_eq!(next_power_of_two(5), 8);
    assert_eq!(next_power_of_two(64), 64);
    assert_eq!(next_power_of_two(65), 128);
}

#[test]
fn test_padding_is_idempotent() {
    let once = gradient(5, 3).pad_to_power_of_two();
    let twice = once.pad_to_power_of_two();
    assert_eq!(once.width(), 8);
    assert_eq!(once.height(), 4);
    assert_eq!(once, twice);
}

#[test]
fn test_padding_centers_original() {
    let original = gradient(5, 3);
    let padded = original.pad_to_power_of_two();
    // left = (8 - 5) / 2 = 1, top = (4 - 3) / 2 = 0
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(padded.pixel(x + 1, y), original.pixel(x, y));
        }
    }
    assert_eq!(padded.pixel(0, 0), Some(Rgb::WHITE));
    assert_eq!(padded.pixel(7, 3), Some(Rgb::WHITE));
}

// ==================== Partition Tests ====================

#[test]
fn test_partition_covers_every_pixel_once() {
    let grid = gradient(16, 8);
    for resolution in [1, 3, 5, 8] {
        let regions = grid.partition(resolution).unwrap();
        let mut seen = vec![0u32; 16 * 8];
        for region in regions.iter() {
            for dy in 0..region.height() {
                for dx in 0..region.width() {
                    seen[((region.y() + dy) * 16 + region.x() + dx) as usize] += 1;
                }
            }
        }
        assert!(seen.iter().all(|&n| n == 1), "resolution {}", resolution);
    }
}

#[test]
fn test_partition_rejects_bad_resolution() {
    let grid = gradient(4, 4);
    assert!(matches!(
        grid.partition(0),
        Err(RasterError::InvalidResolution { .. })
    ));
    assert!(matches!(
        grid.partition(5),
        Err(RasterError::InvalidResolution { .. })
    ));
}

// ==================== Brightness Tests ====================

#[test]
fn test_brightness_extremes() {
    assert_eq!(PixelGrid::filled(2, 2, Rgb::BLACK).unwrap().brightness(), 0.0);
    let white = PixelGrid::filled(2, 2, Rgb::WHITE).unwrap().brightness();
    assert!((white - 1.0).abs() < 1e-9);
}

#[test]
fn test_green_outweighs_red_outweighs_blue() {
    let r = luminance::weighted(Rgb::new(255, 0, 0));
    let g = luminance::weighted(Rgb::new(0, 255, 0));
    let b = luminance::weighted(Rgb::new(0, 0, 255));
    assert!(g > r && r > b);
}
