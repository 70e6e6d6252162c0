//! Static-asset copy-through.
//!
//! Binary assets (images, fonts, media) pass from the public directory into
//! the bundler output by file-extension dispatch. Anything with an unlisted
//! extension is skipped and logged; the bundler handles code and styles.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

/// Asset copy errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid asset path.
    #[error("invalid asset path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Extensions that pass through to the output.
const PASSTHROUGH_EXTENSIONS: [&str; 14] = [
    "png", "jpg", "jpeg", "gif", "svg", "webp", "avif", "ico", "woff", "woff2", "ttf", "otf",
    "mp4", "webm",
];

/// Copy all pass-through assets from `source_dir` into `dest_dir`,
/// preserving the directory structure. Returns the number of files copied.
/// A missing source directory is not an error; nothing is copied.
pub fn copy_through(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    if !source_dir.exists() {
        debug!(source = %source_dir.display(), "public directory does not exist, skipping");
        return Ok(0);
    }

    let mut copied = 0;
    copy_dir(source_dir, source_dir, dest_dir, &mut copied)?;

    info!(
        count = copied,
        source = %source_dir.display(),
        dest = %dest_dir.display(),
        "assets copied"
    );
    Ok(copied)
}

/// Recursively walk a directory, copying matching files.
fn copy_dir(base_dir: &Path, current_dir: &Path, dest_base: &Path, copied: &mut usize) -> Result<()> {
    for entry in fs::read_dir(current_dir)? {
        let entry = entry?;
        let path = entry.path();

        // Skip hidden files/directories
        if path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            copy_dir(base_dir, &path, dest_base, copied)?;
        } else if path.is_file() {
            if is_passthrough(&path) {
                copy_file(base_dir, &path, dest_base)?;
                *copied += 1;
            } else {
                debug!(path = %path.display(), "skipping non-asset file");
            }
        }
    }

    Ok(())
}

/// Whether a file's extension is in the pass-through set.
fn is_passthrough(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy().to_lowercase();
        PASSTHROUGH_EXTENSIONS.contains(&ext.as_str())
    })
}

/// Copy one file, mirroring its path relative to the source root.
fn copy_file(base_dir: &Path, file_path: &Path, dest_base: &Path) -> Result<()> {
    let relative = file_path
        .strip_prefix(base_dir)
        .map_err(|_| AssetError::InvalidPath(file_path.to_path_buf()))?;

    let dest_path = dest_base.join(relative);
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(file_path, &dest_path)?;

    debug!(
        src = %file_path.display(),
        dest = %dest_path.display(),
        "copied asset"
    );
    Ok(())
}
