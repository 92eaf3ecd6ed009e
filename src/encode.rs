//! PNG encoding of a finished canvas

use crate::draw::Canvas;
use crate::error::Result;

/// Encode `canvas` as an 8-bit RGBA PNG
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut png_buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_buf, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(canvas.as_raw())?;
        writer.finish()?;
    }
    Ok(png_buf)
}
