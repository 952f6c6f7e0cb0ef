//! Shared file helpers: JSON discovery and decoding.

use crate::error::DataError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse one JSON document.
pub fn read_json(path: &Path) -> Result<Value, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::ParseJson {
        path: path.display().to_string(),
        source,
    })
}

/// Resolve `path` to the JSON files it names.
///
/// A file is returned as-is. A directory is walked recursively and its
/// `*.json` files are returned in sorted path order, so loading is
/// deterministic across platforms. Hidden entries and subdirectories named
/// in `excluded_dirs` are not descended into.
pub fn collect_json_files(
    path: &Path,
    excluded_dirs: &[&str],
) -> Result<Vec<PathBuf>, DataError> {
    let metadata = fs::metadata(path).map_err(|source| DataError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    if metadata.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    let mut pending = vec![path.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|source| DataError::ReadFile {
            path: dir.display().to_string(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| DataError::ReadFile {
                path: dir.display().to_string(),
                source,
            })?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }
            let entry_path = entry.path();
            if entry_path.is_dir() {
                if excluded_dirs.contains(&name.as_ref()) {
                    tracing::debug!(path = %entry_path.display(), "skipping excluded directory");
                    continue;
                }
                pending.push(entry_path);
            } else if entry_path.extension().is_some_and(|ext| ext == "json") {
                files.push(entry_path);
            }
        }
    }
    files.sort();
    Ok(files)
}
