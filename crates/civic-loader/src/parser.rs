//! YAML parsing into the raw field mapping consumed by `civic-core`.
//!
//! Project files are YAML, but records are built from `serde_json` values.
//! Parsing goes through `serde_yaml::Value` and converts the tree, so
//! anything YAML can express but JSON cannot (non-finite floats, complex
//! mapping keys) is rejected here with the file path attached.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{LoadError, LoadResult};

/// Parse one project file into a mapping of field names to raw values.
///
/// An empty document is an empty mapping. Tags are ignored.
pub fn parse_project_yaml(content: &str, path: &Path) -> LoadResult<Map<String, Value>> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|source| LoadError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?;
    match yaml_to_json_value(yaml, path)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(LoadError::NotAMapping {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}

fn yaml_to_json_value(yaml: serde_yaml::Value, path: &Path) -> LoadResult<Value> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| LoadError::UnsupportedYaml {
                        path: path.to_path_buf(),
                        detail: format!("number {n} has no JSON representation"),
                    })
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| yaml_to_json_value(item, path))
            .collect::<LoadResult<Vec<_>>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut obj = Map::new();
            for (k, v) in mapping {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(LoadError::UnsupportedYaml {
                            path: path.to_path_buf(),
                            detail: format!("unsupported mapping key {other:?}"),
                        })
                    }
                };
                obj.insert(key, yaml_to_json_value(v, path)?);
            }
            Ok(Value::Object(obj))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(tagged.value, path),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
