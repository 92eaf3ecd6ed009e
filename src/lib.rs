pub mod color;
pub mod config;
pub mod draw;
pub mod encode;
pub mod error;
pub mod generator;
pub mod layout;
pub mod output;
pub mod raster;

pub use crate::color::{Color, SUGGESTED_BACKGROUNDS};
pub use crate::config::{AvatarConfig, ColorValue};
pub use crate::draw::Canvas;
pub use crate::error::{AvatarError, Result};
pub use crate::generator::{AvatarGenerator, AvatarSettings};
