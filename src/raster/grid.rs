//! Immutable RGB pixel grid and independently owned regions.

use super::error::RasterError;
use super::luminance;

/// A single RGB sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure white, used to fill padding.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }
}

/// Rectangular grid of RGB samples stored in row-major order.
///
/// A grid is never modified after construction; padding and region
/// extraction produce new grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build a grid from row-major samples.
    ///
    /// Fails if either dimension is zero or if `pixels.len()` is not
    /// exactly `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RasterError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Grid of the given size with every sample set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, RasterError> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    /// Build a grid by evaluating `f(x, y)` for every sample.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, RasterError>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Build a grid from packed RGB bytes (3 bytes per pixel, row-major).
    pub fn from_rgb_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self, RasterError> {
        if data.len() % 3 != 0 {
            return Err(RasterError::PixelCountMismatch {
                expected: width as usize * height as usize,
                actual: data.len() / 3,
            });
        }
        let pixels = data
            .chunks_exact(3)
            .map(|rgb| Rgb::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at column `x`, row `y`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// All samples in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Perceptual brightness of the whole grid, in `[0, 1]`.
    pub fn brightness(&self) -> f64 {
        luminance::average(&self.pixels)
    }

    /// Copy the `width` x `height` rectangle whose top-left corner is
    /// (`x_start`, `y_start`) into a new, independently owned region.
    pub fn extract_region(
        &self,
        x_start: u32,
        y_start: u32,
        width: u32,
        height: u32,
    ) -> Result<Region, RasterError> {
        let out_of_bounds = || RasterError::RegionOutOfBounds {
            x: x_start,
            y: y_start,
            width,
            height,
            grid_width: self.width,
            grid_height: self.height,
        };

        let x_end = x_start.checked_add(width).ok_or_else(out_of_bounds)?;
        let y_end = y_start.checked_add(height).ok_or_else(out_of_bounds)?;
        if x_end > self.width || y_end > self.height {
            return Err(out_of_bounds());
        }

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in self.rows().skip(y_start as usize).take(height as usize) {
            pixels.extend_from_slice(&row[x_start as usize..x_end as usize]);
        }

        Ok(Region {
            x: x_start,
            y: y_start,
            pixels: PixelGrid::new(width, height, pixels)?,
        })
    }
}

/// A rectangular slice of a grid with its own copy of the samples.
///
/// Holds no reference back to the grid it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    x: u32,
    y: u32,
    pixels: PixelGrid,
}

impl Region {
    /// Column of the top-left corner in the source grid.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Row of the top-left corner in the source grid.
    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.pixels.width
    }

    pub fn height(&self) -> u32 {
        self.pixels.height
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    pub fn brightness(&self) -> f64 {
        self.pixels.brightness()
    }
}
