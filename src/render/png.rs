//! PNG output for rendered icons.
//!
//! Icons are encoded into an intermediate file next to the destination and
//! renamed over it, so a destination is either the complete new PNG or left
//! as it was.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::{IconError, Result};

/// An intermediate file that could not be removed.
///
/// Not fatal: the destination is already correct or untouched, there is
/// just a stray file to clean up by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Write `image` to `path` as PNG, creating parent directories as needed.
///
/// Cleanup problems with the intermediate file are pushed onto `warnings`.
pub fn write_png(
    image: &RgbaImage,
    path: &Path,
    warnings: &mut Vec<CleanupWarning>,
) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir)
        .map_err(|e| IconError::io(dir, format!("Failed to create directory: {}", e)))?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".icon-").suffix(".png.part");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Renamed into place as is, so it needs the final mode, not 0600.
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut temp = builder
        .tempfile_in(dir)
        .map_err(|e| IconError::io(dir, format!("Failed to create intermediate file: {}", e)))?;

    if let Err(e) = encode_into(image, &mut temp) {
        discard(temp, warnings);
        return Err(IconError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        });
    }

    temp.persist(path).map_err(|e| {
        let message = format!("Failed to move PNG into place: {}", e.error);
        discard(e.file, warnings);
        IconError::io(path, message)
    })?;

    Ok(())
}

fn encode_into(image: &RgbaImage, temp: &mut NamedTempFile) -> std::io::Result<()> {
    let mut writer = BufWriter::new(temp.as_file_mut());
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(std::io::Error::other)?;
    writer.flush()?;
    drop(writer);
    temp.as_file().sync_all()
}

/// Delete an intermediate file, recording a warning if that fails.
fn discard(temp: NamedTempFile, warnings: &mut Vec<CleanupWarning>) {
    let path = temp.path().to_path_buf();
    if let Err(e) = temp.close() {
        warnings.push(CleanupWarning {
            path,
            message: e.to_string(),
        });
    }
}
