//! Loader error types.
//!
//! Every error that concerns a file carries its path. Validation failures
//! from `civic-core` are wrapped rather than flattened so callers can still
//! match on the field and reason.

use std::path::PathBuf;

use civic_core::ValidationError;
use thiserror::Error;

/// Errors raised while loading project description files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The directory yielded zero project files, or does not exist.
    #[error("no project files found in directory {dir}")]
    NoRecords { dir: PathBuf },

    /// The directory exists but could not be listed.
    #[error("cannot read directory {dir}: {source}")]
    DirectoryUnreadable {
        dir: PathBuf,
        source: std::io::Error,
    },

    /// A named project or config file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The document parsed, but its top level is not a mapping.
    #[error("{path}: expected a mapping of fields, found {found}")]
    NotAMapping { path: PathBuf, found: &'static str },

    /// The document contains YAML that has no JSON equivalent.
    #[error("{path}: {detail}")]
    UnsupportedYaml { path: PathBuf, detail: String },

    /// No project key can be derived from the file name.
    #[error("cannot derive a project key from file name {path}")]
    InvalidKey { path: PathBuf },

    /// The file's fields failed schema validation.
    #[error("invalid project file {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },

    /// Any other I/O failure reading a file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

impl LoadError {
    /// Map a file read failure, distinguishing a missing file.
    pub(crate) fn reading(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// The validation failure behind this error, if that is what it was.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::{Field, ValueError};

    #[test]
    fn no_records_display() {
        let err = LoadError::NoRecords {
            dir: PathBuf::from("/no/yml/files/here"),
        };
        let msg = err.to_string();
        assert!(msg.contains("no project files found"));
        assert!(msg.contains("/no/yml/files/here"));
    }

    #[test]
    fn file_not_found_from_io_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = LoadError::reading(std::path::Path::new("/tmp/missing.yml"), io_err);
        assert!(matches!(err, LoadError::FileNotFound { .. }));
        assert!(err.to_string().contains("/tmp/missing.yml"));
    }

    #[test]
    fn other_io_kinds_stay_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoadError::reading(std::path::Path::new("p.yml"), io_err);
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn invalid_display_names_path_field_and_reason() {
        let err = LoadError::Invalid {
            path: PathBuf::from("projects/bad.yml"),
            source: ValueError::RequiredValue.for_field(Field::Name),
        };
        let msg = err.to_string();
        assert!(msg.contains("projects/bad.yml"));
        assert!(msg.contains("name"));
        assert!(msg.contains("cannot be empty"));
        assert_eq!(
            err.validation_error().and_then(ValidationError::field),
            Some(Field::Name)
        );
    }

    #[test]
    fn not_a_mapping_display() {
        let err = LoadError::NotAMapping {
            path: PathBuf::from("list.yml"),
            found: "array",
        };
        assert!(err.to_string().contains("found array"));
        assert!(err.validation_error().is_none());
    }
}
