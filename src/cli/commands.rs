//! The render command: merge settings, build a palette and render one image.

use std::sync::Arc;

use asciify::config::{Config, ConfigError};
use asciify::glyph::{CharSet, Palette, PaletteError, RoundingPolicy};
use asciify::raster::PixelGrid;
use asciify::render::{CharGrid, RenderError, RenderPipeline, ResolutionBounds};

use super::args::Args;

/// Errors surfaced by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// A config value names a charset or rounding policy that does not exist
    #[error("unknown {setting} '{value}' in config file")]
    UnknownSetting { setting: &'static str, value: String },
}

/// Settings after merging CLI flags over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    resolution: u32,
    charset: CharSet,
    policy: RoundingPolicy,
}

impl Settings {
    fn merge(args: &Args, config: &Config) -> Result<Self, CliError> {
        let charset = match (args.charset, config.palette.charset.as_deref()) {
            (Some(c), _) => c.into(),
            (None, Some(name)) => {
                CharSet::from_name(name).ok_or_else(|| CliError::UnknownSetting {
                    setting: "charset",
                    value: name.to_string(),
                })?
            }
            (None, None) => CharSet::default(),
        };

        let policy = match (args.round, config.render.rounding.as_deref()) {
            (Some(r), _) => r.into(),
            (None, Some(name)) => {
                RoundingPolicy::from_name(name).ok_or_else(|| CliError::UnknownSetting {
                    setting: "rounding",
                    value: name.to_string(),
                })?
            }
            (None, None) => RoundingPolicy::default(),
        };

        Ok(Self {
            resolution: args.resolution.unwrap_or(config.render.resolution),
            charset,
            policy,
        })
    }
}

/// Build the palette: preset, then config extras, then `--add`, then `--remove`.
fn build_palette(args: &Args, config: &Config, charset: CharSet) -> Result<Palette, CliError> {
    let mut palette = Palette::from_charset(charset)?;

    if let Some(extra) = &config.palette.extra {
        for c in extra.chars() {
            palette.insert(c)?;
        }
    }
    for selection in &args.add {
        palette.insert_selection(*selection)?;
    }
    for selection in &args.remove {
        let removed = palette.remove_selection(*selection);
        log::debug!("removed {} glyph(s) for '{}'", removed, selection);
    }

    log::info!("palette: {:?}", palette.chars().into_iter().collect::<String>());
    Ok(palette)
}

/// Render the image named by `args`.
pub fn run(args: &Args) -> Result<CharGrid, CliError> {
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::merge(args, &config)?;
    log::debug!("settings: {:?}", settings);

    let image = Arc::new(PixelGrid::load(&args.image).map_err(RenderError::from)?);
    let resolution = ResolutionBounds::for_image(&image).check(settings.resolution)?;
    let palette = build_palette(args, &config, settings.charset)?;

    let mut pipeline = RenderPipeline::with_policy(settings.policy);
    Ok(pipeline.render(&image, resolution, &palette)?)
}
