//! Configuration handling for letter-avatar
//!
//! This file defines an optional TOML configuration for a generator.
//! Every field except the font path falls back to the generator
//! defaults when missing.

use crate::color::Color;
use crate::error::{AvatarError, Result};
use crate::generator::AvatarSettings;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A color written either as a packed hex integer or an RGBA array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// `0xRRGGBB`, always opaque
    Hex(u32),
    Rgba([u8; 4]),
}

impl From<ColorValue> for Color {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Hex(hex) => Color::from_hex(hex),
            ColorValue::Rgba(rgba) => Color::from(rgba),
        }
    }
}

/// Generator configuration as stored in a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub font_file: PathBuf,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub font_size: Option<f32>,
    pub background: Option<ColorValue>,
    pub foreground: Option<ColorValue>,
}

impl AvatarConfig {
    /// Configuration with every optional field left at its default
    pub fn new(font_file: impl Into<PathBuf>) -> Self {
        Self {
            font_file: font_file.into(),
            width: None,
            height: None,
            font_size: None,
            background: None,
            foreground: None,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AvatarError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve into settings with no optional fields
    pub fn settings(&self) -> AvatarSettings {
        let defaults = AvatarSettings::default();
        AvatarSettings {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            font_size: self.font_size.unwrap_or(defaults.font_size),
            background: self.background.map(Color::from).unwrap_or(defaults.background),
            foreground: self.foreground.map(Color::from).unwrap_or(defaults.foreground),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = AvatarConfig::from_toml_str(r#"font_file = "fonts/a.ttf""#).unwrap();
        assert_eq!(config, AvatarConfig::new("fonts/a.ttf"));
        assert_eq!(config.settings(), AvatarSettings::default());
    }

    #[test]
    fn full_config_resolves_both_color_forms() {
        let config = AvatarConfig::from_toml_str(
            r#"
            font_file = "a.ttf"
            width = 128
            height = 96
            font_size = 48.0
            background = 0xff6200
            foreground = [10, 20, 30, 40]
            "#,
        )
        .unwrap();

        let settings = config.settings();
        assert_eq!((settings.width, settings.height), (128, 96));
        assert_eq!(settings.font_size, 48.0);
        assert_eq!(settings.background, Color::rgb(255, 98, 0));
        assert_eq!(settings.foreground, Color::rgba(10, 20, 30, 40));
    }

    #[test]
    fn missing_font_file_is_a_parse_error() {
        let err = AvatarConfig::from_toml_str("width = 10").unwrap_err();
        assert!(matches!(err, AvatarError::ConfigParse(_)));
    }

    #[test]
    fn unreadable_file_is_a_read_error() {
        let err = AvatarConfig::load_from_file("no/such/config.toml").unwrap_err();
        assert!(matches!(err, AvatarError::ConfigRead { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.toml");
        fs::write(&path, "font_file = \"x.ttf\"\nbackground = [1, 2, 3, 255]\n").unwrap();

        let config = AvatarConfig::load_from_file(&path).unwrap();
        assert_eq!(config.background, Some(ColorValue::Rgba([1, 2, 3, 255])));
    }
}
