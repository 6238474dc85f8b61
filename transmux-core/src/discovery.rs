//! File discovery module for finding media files to process.
//!
//! Accepts either a single file or a directory. Directories are walked
//! recursively and filtered down to known media container extensions
//! (case-insensitive).

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Container extensions considered candidates for conversion.
const MEDIA_EXTENSIONS: &[&str] = &[
    "mov", "mp4", "mxf", "avi", "mkv", "wmv", "flv", "m4v", "webm", "mpg", "mpeg", "m2ts", "mts",
];

/// Finds media files eligible for processing under the given path.
///
/// A single media file yields a one-element list. Directories are searched
/// recursively. Returns `CoreError::NoFilesFound` when nothing matches and
/// `CoreError::PathError` when the path cannot be accessed at all.
pub fn find_media_files(path: &Path) -> CoreResult<Vec<PathBuf>> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        CoreError::PathError(format!("failed to access '{}': {}", path.display(), e))
    })?;

    let files = if metadata.is_file() {
        if is_media_file(path) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        }
    } else {
        scan_directory(path)?
    };

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        log::info!("found {} media file(s)", files.len());
        Ok(files)
    }
}

fn scan_directory(root: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;

            if file_type.is_file() {
                if is_media_file(&path) {
                    log::debug!("found media file: {}", path.display());
                    files.push(path);
                }
            } else if file_type.is_dir() {
                stack.push(path);
            }
        }
    }

    Ok(files)
}

fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_lowercase();
            MEDIA_EXTENSIONS.contains(&lower.as_str())
        })
}
