//! Source file discovery and loading.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Extensions of the source files a corpus is made of.
pub const SOURCE_EXTENSIONS: &[&str] = &["c"];

/// Errors raised while locating or reading source files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported file extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),
}

/// Every source file below `dir`, depth-first with entries of each
/// directory in file-name order.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && validate_extension(entry.path()).is_ok() {
            paths.push(entry.into_path());
        }
    }
    debug!(dir = %dir.display(), files = paths.len(), "collected source files");
    Ok(paths)
}

pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

pub fn validate_extension(path: &Path) -> Result<(), LoadError> {
    match get_extension(path) {
        Some(ext) if SOURCE_EXTENSIONS.contains(&ext) => Ok(()),
        _ => Err(LoadError::UnsupportedExtension(path.to_path_buf())),
    }
}

/// Read a source file. Bytes that are not valid UTF-8 are replaced.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    validate_extension(path)?;
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
