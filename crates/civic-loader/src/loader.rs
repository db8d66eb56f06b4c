//! # Directory Loading
//!
//! One file holds one project. The file's base name, minus its extension,
//! becomes the record's `key`; any `key` written inside the file is
//! ignored. A directory is scanned without recursion, files are read in
//! path order, and the resulting records are returned in display order.
//!
//! Loading stops at the first invalid file. A directory that is missing or
//! contains no project files is an error, never an empty list.

use std::path::{Path, PathBuf};

use civic_core::{sort_for_display, Field, Record, Schema};
use serde_json::Value;

use crate::config::LoaderConfig;
use crate::error::{LoadError, LoadResult};
use crate::parser::parse_project_yaml;

/// Load a single project file.
///
/// # Errors
///
/// [`LoadError::FileNotFound`] or [`LoadError::Io`] when the file cannot be
/// read, a parse error when it is not a YAML mapping, and
/// [`LoadError::Invalid`] when the fields fail validation.
pub fn load_file(path: &Path, schema: &'static Schema) -> LoadResult<Record> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::reading(path, e))?;
    let raw = parse_project_yaml(&content, path)?;
    let key = Value::String(project_key(path)?);

    let pairs = raw
        .iter()
        .filter(|(name, _)| !matches!(Field::canonicalize(name), Ok(Field::Key)))
        .map(|(name, value)| (name.as_str(), value))
        .chain(std::iter::once((Field::Key.as_str(), &key)));
    let record = Record::from_pairs(schema, pairs).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), key = %key, "loaded project file");
    Ok(record)
}

/// Load every project file in `dir` with the default configuration.
pub fn load_dir(dir: &Path) -> LoadResult<Vec<Record>> {
    load_dir_with(dir, &LoaderConfig::default())
}

/// Load every project file in `dir`, sorted for display.
///
/// # Errors
///
/// [`LoadError::NoRecords`] when the directory is missing or has no files
/// with a configured extension, [`LoadError::DirectoryUnreadable`] when it
/// exists but cannot be listed, or the first [`load_file`] error.
pub fn load_dir_with(dir: &Path, config: &LoaderConfig) -> LoadResult<Vec<Record>> {
    let files = project_files(dir, config)?;
    if files.is_empty() {
        return Err(LoadError::NoRecords {
            dir: dir.to_path_buf(),
        });
    }

    let schema = config.schema();
    let mut records = files
        .iter()
        .map(|path| load_file(path, schema))
        .collect::<LoadResult<Vec<_>>>()?;
    sort_for_display(&mut records);

    tracing::info!(
        dir = %dir.display(),
        count = records.len(),
        "loaded project directory"
    );
    Ok(records)
}

/// Project files directly inside `dir`, sorted by path.
fn project_files(dir: &Path, config: &LoaderConfig) -> LoadResult<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(dir = %dir.display(), "project directory does not exist");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LoadError::DirectoryUnreadable {
                dir: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && config.matches_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn project_key(path: &Path) -> LoadResult<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| LoadError::InvalidKey {
            path: path.to_path_buf(),
        })
}
