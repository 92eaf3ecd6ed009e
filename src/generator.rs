//! Avatar generator
//!
//! Holds the mutable configuration and runs the render pipeline:
//! background canvas, glyph placement, rasterization and PNG encoding.

use crate::color::Color;
use crate::config::AvatarConfig;
use crate::encode::encode_png;
use crate::error::{AvatarError, Result};
use crate::output::write_image;
use crate::raster::RasterContext;
use log::debug;
use std::path::{Path, PathBuf};

/// Largest canvas side; glyph placement works in `i32` pixel space
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Rendering settings for an avatar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarSettings {
    pub width: u32,
    pub height: u32,
    pub font_size: f32,
    pub background: Color,
    pub foreground: Color,
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            font_size: 64.0,
            background: Color::WHITE,
            foreground: Color::BLACK,
        }
    }
}

impl AvatarSettings {
    /// Check the dimensions and font size are usable
    pub fn validate(&self) -> Result<()> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(AvatarError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(AvatarError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}

/// Generates letter avatars from one font file.
///
/// The rasterizer context is built on the first generation call and
/// reused afterwards. It snapshots size, font size and both colors, so
/// setters called after the first render update [`settings`] but do not
/// change the images this instance produces. Create a new generator to
/// render with different settings.
///
/// Generation takes `&mut self`; share an instance across threads only
/// behind a `Mutex`, or give each thread its own generator.
///
/// [`settings`]: AvatarGenerator::settings
pub struct AvatarGenerator {
    font_file: PathBuf,
    settings: AvatarSettings,
    context: Option<RasterContext>,
}

impl AvatarGenerator {
    /// Create a generator with 64x64 black-on-white defaults
    pub fn new(font_file: impl Into<PathBuf>) -> Self {
        Self {
            font_file: font_file.into(),
            settings: AvatarSettings::default(),
            context: None,
        }
    }

    pub fn from_config(config: AvatarConfig) -> Self {
        let settings = config.settings();
        Self {
            font_file: config.font_file,
            settings,
            context: None,
        }
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.settings.background = color;
    }

    /// Set the background from a packed `0xRRGGBB` value, e.g. one of
    /// [`SUGGESTED_BACKGROUNDS`](crate::color::SUGGESTED_BACKGROUNDS)
    pub fn set_background_color_hex(&mut self, hex: u32) {
        self.settings.background = Color::from_hex(hex);
    }

    pub fn set_foreground_color(&mut self, color: Color) {
        self.settings.foreground = color;
    }

    pub fn set_foreground_color_hex(&mut self, hex: u32) {
        self.settings.foreground = Color::from_hex(hex);
    }

    /// Set the avatar size, default 64x64
    pub fn set_avatar_size(&mut self, width: u32, height: u32) {
        self.settings.width = width;
        self.settings.height = height;
    }

    /// Set the font size, default 64
    pub fn set_font_size(&mut self, size: f32) {
        self.settings.font_size = size;
    }

    pub fn settings(&self) -> &AvatarSettings {
        &self.settings
    }

    pub fn font_file(&self) -> &Path {
        &self.font_file
    }

    /// Whether the rasterizer context has been built and frozen
    pub fn is_context_built(&self) -> bool {
        self.context.is_some()
    }

    /// Render `text` and return the PNG bytes
    pub fn generate_image_content(&mut self, text: &str) -> Result<Vec<u8>> {
        let context = match self.context.take() {
            Some(context) => context,
            None => {
                debug!("Building rasterizer context");
                RasterContext::build(&self.font_file, &self.settings)?
            }
        };

        let rendered = context.render(text);
        self.context = Some(context);

        encode_png(&rendered?)
    }

    /// Render `text` and write the PNG to `out_file`
    pub fn generate_image(&mut self, text: &str, out_file: impl AsRef<Path>) -> Result<()> {
        let bytes = self.generate_image_content(text)?;
        write_image(out_file.as_ref(), &bytes)
    }
}
