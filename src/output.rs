//! Writing encoded avatars to disk

use crate::error::{AvatarError, Result};
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Create or truncate `path` and write `bytes` to it.
///
/// Create, write and flush failures are reported as separate errors.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|source| AvatarError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|source| AvatarError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| AvatarError::OutputFlush {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
