//! Font rasterizer context
//!
//! Loads a font face with fontdue and binds it to everything a render
//! needs: size, DPI, canvas bounds, background and ink. Glyphs are
//! rasterized straight from their outlines, without hinting.

use crate::color::Color;
use crate::draw::Canvas;
use crate::error::{AvatarError, Result};
use crate::generator::AvatarSettings;
use crate::layout::{glyph_origin, Point};
use fontdue::{Font, FontSettings};
use log::{debug, info, warn};
use std::{fs, path::Path};

/// Fixed pixel density used for point-to-pixel conversion
pub const DPI: f32 = 72.0;

/// Convert a point size into 26.6 fixed-point pixel units
pub fn point_to_fixed(size: f32) -> i32 {
    (size * DPI * (64.0 / 72.0)) as i32
}

/// Nominal advance width in whole pixels for a point size
pub fn font_width_for(size: f32) -> i32 {
    point_to_fixed(size) >> 6
}

/// A loaded font bound to one canvas configuration.
///
/// Built once per generator; the settings it was built from are frozen.
pub struct RasterContext {
    font: Font,
    font_size: f32,
    px: f32,
    width: u32,
    height: u32,
    background: Color,
    ink: Color,
}

impl RasterContext {
    /// Read and parse `font_file`, binding it to a snapshot of `settings`
    pub fn build(font_file: &Path, settings: &AvatarSettings) -> Result<Self> {
        settings.validate()?;

        let font_bytes = fs::read(font_file).map_err(|source| AvatarError::FileRead {
            path: font_file.to_path_buf(),
            source,
        })?;

        let px = settings.font_size * DPI / 72.0;
        let font = Font::from_bytes(
            font_bytes,
            FontSettings {
                scale: px,
                ..FontSettings::default()
            },
        )
        .map_err(|reason| AvatarError::FontParse {
            path: font_file.to_path_buf(),
            reason,
        })?;

        info!(
            "Loaded font {} at size {} for {}x{} canvas",
            font_file.display(),
            settings.font_size,
            settings.width,
            settings.height
        );

        Ok(Self {
            font,
            font_size: settings.font_size,
            px,
            width: settings.width,
            height: settings.height,
            background: settings.background,
            ink: settings.foreground,
        })
    }

    /// Canvas bounds the context clips to
    pub fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn font_width(&self) -> i32 {
        font_width_for(self.font_size)
    }

    /// Paint the background and draw `text` centered on it
    pub fn render(&self, text: &str) -> Result<Canvas> {
        let mut canvas = Canvas::filled(self.width, self.height, self.background)?;
        let origin = glyph_origin(self.width, self.height, self.font_width());
        debug!("Rendering {:?} at ({}, {})", text, origin.x, origin.y);

        self.draw_string(&mut canvas, text, origin)?;
        Ok(canvas)
    }

    /// Draw `text` with its baseline starting at `origin`.
    ///
    /// Fails before touching the canvas if any non-whitespace character
    /// has no glyph in the font. Whitespace the font does not map is
    /// skipped.
    pub fn draw_string(&self, canvas: &mut Canvas, text: &str, origin: Point) -> Result<()> {
        if let Some(ch) = text
            .chars()
            .find(|&ch| !ch.is_whitespace() && self.font.lookup_glyph_index(ch) == 0)
        {
            warn!("Font has no glyph for {:?}", ch);
            return Err(AvatarError::Draw { ch });
        }

        let mut pen_x = origin.x as f32;
        let mut prev: Option<char> = None;

        for ch in text.chars() {
            // Unmapped whitespace would otherwise draw as the .notdef box.
            if self.font.lookup_glyph_index(ch) == 0 {
                prev = None;
                continue;
            }

            if let Some(left) = prev {
                pen_x += self.font.horizontal_kern(left, ch, self.px).unwrap_or(0.0);
            }

            let (metrics, bitmap) = self.font.rasterize(ch, self.px);
            let left = pen_x.round() as i32 + metrics.xmin;
            let top = origin.y - metrics.ymin - metrics.height as i32;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    canvas.blend_coverage(left + col as i32, top + row as i32, self.ink, coverage);
                }
            }

            pen_x += metrics.advance_width;
            prev = Some(ch);
        }

        Ok(())
    }
}
