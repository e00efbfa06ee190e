//! Centering a grid on a power-of-two canvas.

use super::grid::{PixelGrid, Rgb};

/// Smallest power of two that is `>= n`.
///
/// Returns 1 for `n <= 0` and `n` itself when it already is a power of two.
pub fn next_power_of_two(n: i64) -> i64 {
    if n <= 0 {
        return 1;
    }
    if n & (n - 1) == 0 {
        return n;
    }
    let mut power = 1;
    while power < n {
        power <<= 1;
    }
    power
}

impl PixelGrid {
    /// Pad to the next power of two in each dimension, keeping the
    /// original centered and filling the border with white.
    ///
    /// Odd deltas put the extra row or column at the bottom/right, so the
    /// top and left padding are `(new - old) / 2`.
    pub fn pad_to_power_of_two(&self) -> PixelGrid {
        let new_width = next_power_of_two(self.width() as i64) as u32;
        let new_height = next_power_of_two(self.height() as i64) as u32;
        if new_width == self.width() && new_height == self.height() {
            return self.clone();
        }

        let top = (new_height - self.height()) / 2;
        let left = (new_width - self.width()) / 2;
        let mut pixels = vec![Rgb::WHITE; new_width as usize * new_height as usize];
        for (y, row) in self.rows().enumerate() {
            let start = (top as usize + y) * new_width as usize + left as usize;
            pixels[start..start + row.len()].copy_from_slice(row);
        }

        log::trace!(
            "padded {}x{} to {}x{}",
            self.width(),
            self.height(),
            new_width,
            new_height
        );

        PixelGrid {
            width: new_width,
            height: new_height,
            pixels,
        }
    }
}
