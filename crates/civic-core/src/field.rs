//! # Field Identifiers and Canonicalization
//!
//! [`Field`] is the canonical identifier for every field a project
//! description may carry. Its declaration order is the schema's declared
//! field order, which drives [`Record::to_list`](crate::Record::to_list).
//!
//! Callers can address a field either by the enum itself or by name in
//! any casing (`"description"`, `"Description"`, `"DESCRIPTION"`). Names
//! are uppercased and looked up against the canonical identifiers; an
//! unrecognized name is a [`ValidationError::UnknownField`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// A recognized project description field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Identifier of the project, taken from the source file name.
    Key,
    /// Human-readable project name.
    Name,
    /// One or more sentences describing the project.
    Description,
    /// Where the running project can be used.
    AccessAt,
    /// Where the project's source or home page lives.
    ProjectAt,
    /// Kind of deliverable; see [`ProjectType`](crate::ProjectType).
    Type,
    /// Lifecycle stage; see [`ProjectStatus`](crate::ProjectStatus).
    Status,
    /// Free-form topic tags.
    Categories,
    /// Contact address for the project.
    Contact,
}

/// Number of recognized fields.
pub const FIELD_COUNT: usize = 9;

impl Field {
    /// All fields in declared order.
    pub fn all() -> &'static [Field] {
        &[
            Self::Key,
            Self::Name,
            Self::Description,
            Self::AccessAt,
            Self::ProjectAt,
            Self::Type,
            Self::Status,
            Self::Categories,
            Self::Contact,
        ]
    }

    /// Canonical (uppercase) identifier, e.g. `ACCESS_AT`.
    pub fn as_canonical(&self) -> &'static str {
        match self {
            Self::Key => "KEY",
            Self::Name => "NAME",
            Self::Description => "DESCRIPTION",
            Self::AccessAt => "ACCESS_AT",
            Self::ProjectAt => "PROJECT_AT",
            Self::Type => "TYPE",
            Self::Status => "STATUS",
            Self::Categories => "CATEGORIES",
            Self::Contact => "CONTACT",
        }
    }

    /// Lowercase field name as it appears in project files, e.g. `access_at`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Name => "name",
            Self::Description => "description",
            Self::AccessAt => "access_at",
            Self::ProjectAt => "project_at",
            Self::Type => "type",
            Self::Status => "status",
            Self::Categories => "categories",
            Self::Contact => "contact",
        }
    }

    /// Position of this field in declared order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Canonicalize a field name in any casing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] carrying `name` unchanged
    /// when the uppercased name is not a recognized field.
    pub fn canonicalize(name: &str) -> Result<Field, ValidationError> {
        let upper = name.to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|f| f.as_canonical() == upper)
            .ok_or_else(|| ValidationError::UnknownField {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    /// Case-insensitive; same rules as [`Field::canonicalize`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::canonicalize(s)
    }
}

/// Anything a record field can be addressed by.
///
/// Implemented for [`Field`] itself (returned unchanged, cannot fail) and
/// for string names (canonicalized, may fail).
pub trait FieldName {
    /// Resolve to a canonical [`Field`].
    fn to_field(&self) -> Result<Field, ValidationError>;
}

impl FieldName for Field {
    fn to_field(&self) -> Result<Field, ValidationError> {
        Ok(*self)
    }
}

impl FieldName for &str {
    fn to_field(&self) -> Result<Field, ValidationError> {
        Field::canonicalize(self)
    }
}

impl FieldName for String {
    fn to_field(&self) -> Result<Field, ValidationError> {
        Field::canonicalize(self)
    }
}

impl FieldName for &String {
    fn to_field(&self) -> Result<Field, ValidationError> {
        Field::canonicalize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;

    #[test]
    fn test_all_fields_count() {
        assert_eq!(Field::all().len(), FIELD_COUNT);
    }

    #[test]
    fn test_all_fields_in_declared_order() {
        for (i, field) in Field::all().iter().enumerate() {
            assert_eq!(field.index(), i, "{field} out of order");
        }
        let mut sorted = Field::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, Field::all());
    }

    #[test]
    fn test_canonical_is_uppercase_of_name() {
        for field in Field::all() {
            assert_eq!(field.as_canonical(), field.as_str().to_uppercase());
        }
    }

    #[test]
    fn test_canonicalize_lowercase_name() {
        assert_eq!(Field::canonicalize("description").unwrap(), Field::Description);
    }

    #[test]
    fn test_canonicalize_mixed_case_name() {
        assert_eq!(Field::canonicalize("Access_At").unwrap(), Field::AccessAt);
        assert_eq!("KEY".parse::<Field>().unwrap(), Field::Key);
    }

    #[test]
    fn test_canonical_field_returned_unchanged() {
        let field = Field::Description;
        assert_eq!(field.to_field().unwrap(), field);
        assert_eq!(
            Field::canonicalize(field.as_canonical()).unwrap(),
            field
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Field::canonicalize("CUPCAKES").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::UnknownField);
        assert!(err.to_string().contains("CUPCAKES"));
    }

    #[test]
    fn test_dashed_name_is_not_an_alias() {
        assert!(Field::canonicalize("access-at").is_err());
        assert!(Field::canonicalize("contacts").is_err());
        assert!(Field::canonicalize("").is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for field in Field::all() {
            let json = serde_json::to_string(field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for field in Field::all() {
            assert_eq!(field.to_string(), field.as_str());
        }
    }
}
