//! Drawing utilities for letter-avatar
//!
//! This file contains the owned RGBA canvas the avatar is painted on,
//! the solid background fill and the coverage blend used when glyph
//! bitmaps are composited onto it.

use crate::color::Color;
use crate::error::{AvatarError, Result};
use crate::generator::MAX_DIMENSION;

/// Owned RGBA8 pixel buffer, row-major, four bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    buffer: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas where every pixel is exactly `color`
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(AvatarError::InvalidSize { width, height });
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(AvatarError::InvalidSize { width, height })?;
        let mut buffer = vec![0; len];
        fill_canvas_with_color(&mut buffer, color);

        Ok(Self {
            buffer,
            width,
            height,
        })
    }

    /// Get the width of the canvas
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the canvas
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let px = &self.buffer[idx..idx + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.buffer
    }

    /// Composite `ink` over the pixel at `(x, y)` with the given 8-bit coverage.
    ///
    /// Coordinates outside the canvas are clipped.
    pub fn blend_coverage(&mut self, x: i32, y: i32, ink: Color, coverage: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        if coverage == 0 || ink.a == 0 {
            return;
        }

        let idx = self.index(x as u32, y as u32);
        let dst = &mut self.buffer[idx..idx + 4];

        let src_a = (ink.a as f32 / 255.0) * (coverage as f32 / 255.0);
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let src = [ink.r, ink.g, ink.b];
        for (channel, &s) in dst[..3].iter_mut().zip(src.iter()) {
            let value = (s as f32 * src_a + *channel as f32 * dst_a * (1.0 - src_a)) / out_a;
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Fill a raw RGBA buffer with a solid color
pub fn fill_canvas_with_color(canvas: &mut [u8], color: Color) {
    let color = color.to_array();
    for pixel in canvas.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_canvas_is_uniform() {
        let color = Color::rgba(12, 34, 56, 78);
        for (w, h) in [(1, 1), (64, 64), (3, 17), (100, 2)] {
            let canvas = Canvas::filled(w, h, color).unwrap();
            assert_eq!(canvas.as_raw().len(), (w * h * 4) as usize);
            for y in 0..h {
                for x in 0..w {
                    assert_eq!(canvas.pixel(x, y), Some(color));
                }
            }
        }
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            Canvas::filled(0, 10, Color::WHITE),
            Err(AvatarError::InvalidSize { width: 0, height: 10 })
        ));
        assert!(Canvas::filled(10, 0, Color::WHITE).is_err());
    }

    #[test]
    fn oversized_dimension_is_rejected() {
        assert!(matches!(
            Canvas::filled(u32::MAX, u32::MAX, Color::WHITE),
            Err(AvatarError::InvalidSize { .. })
        ));
        assert!(Canvas::filled(MAX_DIMENSION + 1, 1, Color::WHITE).is_err());
    }

    #[test]
    fn pixel_outside_bounds_is_none() {
        let canvas = Canvas::filled(4, 4, Color::WHITE).unwrap();
        assert_eq!(canvas.pixel(4, 0), None);
        assert_eq!(canvas.pixel(0, 4), None);
    }

    #[test]
    fn full_coverage_replaces_pixel() {
        let mut canvas = Canvas::filled(2, 2, Color::WHITE).unwrap();
        canvas.blend_coverage(1, 1, Color::BLACK, 255);
        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn partial_coverage_mixes_over_opaque() {
        let mut canvas = Canvas::filled(1, 1, Color::WHITE).unwrap();
        canvas.blend_coverage(0, 0, Color::BLACK, 128);
        let px = canvas.pixel(0, 0).unwrap();
        assert_eq!(px.a, 255);
        assert!(px.r > 120 && px.r < 135, "got {}", px.r);
    }

    #[test]
    fn blend_outside_is_clipped() {
        let mut canvas = Canvas::filled(2, 2, Color::WHITE).unwrap();
        let before = canvas.clone();
        canvas.blend_coverage(-1, 0, Color::BLACK, 255);
        canvas.blend_coverage(0, 2, Color::BLACK, 255);
        canvas.blend_coverage(2, 0, Color::BLACK, 255);
        assert_eq!(canvas, before);
    }
}
