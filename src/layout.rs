//! Glyph placement for the avatar letter
//!
//! The origin is where the rasterizer starts the baseline. The factors
//! below are an empirical fit for a single glyph on a 64x64 canvas at
//! font size 64; longer strings are not truly centered.

/// Integer pixel position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Compute the baseline origin that visually centers one glyph.
///
/// `font_width` is the nominal advance width in whole pixels.
pub fn glyph_origin(width: u32, height: u32, font_width: i32) -> Point {
    let width = width as i32;
    let height = height as i32;

    // Approximate glyph width as 3/5 of the advance.
    let x = width / 2 - (font_width * 3 / 5) / 2;
    // Baseline sits below center to balance ascender and descender.
    let y = height / 2 + font_width * 4 / 11;

    Point { x, y }
}
