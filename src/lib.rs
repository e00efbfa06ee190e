//! asciify library crate.
//!
//! Turns raster images into grids of characters chosen by ink density:
//! [`raster`] loads, pads and partitions pixel grids, [`glyph`] keeps the
//! palette of output characters and matches brightness to them, and
//! [`render`] ties both together behind a cached pipeline.

pub mod config;
pub mod glyph;
pub mod raster;
pub mod render;
