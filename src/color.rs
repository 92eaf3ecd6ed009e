//! Color values for avatars
//!
//! Colors are plain RGBA values with straight (non-premultiplied) alpha.

/// Background colors that pair well with white or black letters
pub const SUGGESTED_BACKGROUNDS: [u32; 4] = [0xff6200, 0x42c58e, 0x5a8de1, 0x785fe0];

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Resolve a packed `0xRRGGBB` value into an opaque color.
    ///
    /// Bits above 23 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            (hex >> 16) as u8,
            ((hex & 0x00ff00) >> 8) as u8,
            (hex & 0x0000ff) as u8,
        )
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_resolves_each_channel() {
        assert_eq!(Color::from_hex(0xFF6200), Color::rgba(255, 98, 0, 255));
        assert_eq!(Color::from_hex(0x42c58e), Color::rgb(0x42, 0xc5, 0x8e));
    }

    #[test]
    fn hex_ignores_high_byte() {
        assert_eq!(Color::from_hex(0xAB_5a8de1), Color::from_hex(0x5a8de1));
    }

    #[test]
    fn named_colors_are_opaque() {
        assert_eq!(Color::WHITE.to_array(), [255, 255, 255, 255]);
        assert_eq!(Color::BLACK.to_array(), [0, 0, 0, 255]);
    }

    #[test]
    fn suggested_backgrounds_are_opaque() {
        for hex in SUGGESTED_BACKGROUNDS {
            assert_eq!(Color::from(hex).a, 255);
        }
    }
}
