//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use asciify::glyph::GlyphSelection;

use super::enums::{CharacterSet, Rounding};

/// Render an image as ASCII art, choosing each glyph by ink density
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Render images as ASCII art by glyph density", long_about = None)]
#[command(after_help = "EXAMPLES:
    asciify photo.jpg --resolution 64
    asciify photo.jpg -r 128 --charset standard --round up
    asciify photo.jpg --add a-z --remove 0-4")]
pub struct Args {
    /// Image file to render
    pub image: PathBuf,

    /// Glyphs per row and per column [default: 2]
    #[arg(long, short)]
    pub resolution: Option<u32>,

    /// Starting character set [default: digits]
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Add glyphs: a character, a range like a-z, 'space' or 'all'
    #[arg(long, value_name = "GLYPHS")]
    pub add: Vec<GlyphSelection>,

    /// Remove glyphs, same syntax as --add
    #[arg(long, value_name = "GLYPHS")]
    pub remove: Vec<GlyphSelection>,

    /// Rounding policy [default: nearest]
    #[arg(long)]
    pub round: Option<Rounding>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}
