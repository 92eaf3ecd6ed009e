//! Error types for letter-avatar
//!
//! Each pipeline stage has its own variant so callers can tell which
//! stage failed.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for avatar operations
pub type Result<T> = std::result::Result<T, AvatarError>;

/// Errors that can occur while generating an avatar
#[derive(Error, Debug)]
pub enum AvatarError {
    /// Canvas dimensions must both be non-zero
    #[error("invalid avatar size {width}x{height}: width and height must be non-zero")]
    InvalidSize { width: u32, height: u32 },

    /// Font size must be a finite, positive number
    #[error("invalid font size {0}: must be a positive number")]
    InvalidFontSize(f32),

    /// The font file could not be read
    #[error("error when opening font file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The font bytes are not a valid font
    #[error("error when parsing font file {}: {reason}", path.display())]
    FontParse { path: PathBuf, reason: &'static str },

    /// The font cannot render a character of the input
    #[error("draw string error: font has no glyph for {ch:?}")]
    Draw { ch: char },

    /// PNG serialization failed
    #[error("png encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("create file error {}: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write bytes to file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("flush image {}: {source}", path.display())]
    OutputFlush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read
    #[error("error when reading config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for `AvatarConfig`
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
