//! Loader configuration.
//!
//! Loaded from a YAML file or built in code. Every field has a default, so
//! an empty config file is valid.
//!
//! ```yaml
//! extensions: [yml, yaml]
//! coerce_scalars_to_lists: true
//! ```

use std::path::Path;

use civic_core::Schema;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// How a project directory is scanned and which schema validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// File extensions, without the dot, that mark a project file.
    /// Matched exactly against the last extension of each file name.
    pub extensions: Vec<String>,
    /// Wrap a lone scalar written to a list field into a one-element list
    /// instead of rejecting it.
    pub coerce_scalars_to_lists: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["yml".to_string()],
            coerce_scalars_to_lists: false,
        }
    }
}

impl LoaderConfig {
    /// Read a config from a YAML file.
    pub fn from_yaml_file(path: &Path) -> LoadResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::reading(path, e))?;
        Self::from_yaml_str(&content, path)
    }

    fn from_yaml_str(content: &str, path: &Path) -> LoadResult<Self> {
        // An empty document deserializes as unit, not as a defaulted struct.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| LoadError::YamlParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The schema records are validated against.
    pub fn schema(&self) -> &'static Schema {
        if self.coerce_scalars_to_lists {
            Schema::civic_project_lenient()
        } else {
            Schema::civic_project()
        }
    }

    /// Whether `path` carries one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
