//! # Project Records
//!
//! A [`Record`] is one validated project description. It is built from a
//! raw mapping of field names to values, mutated field by field, and read
//! back by field or as an owned export.
//!
//! ## Invariants
//!
//! - Only canonical [`Field`]s are ever stored as keys.
//! - Every stored value satisfies its field's rule. Validation runs on
//!   write; a rejected write leaves the record exactly as it was.
//! - A constructed record holds a non-empty value for every required field.
//!   Construction that cannot establish this returns an error and no record.
//!
//! Records are not synchronized. Mutation needs `&mut Record`; a fully
//! constructed record may be shared read-only.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::{ValidationError, ValueError};
use crate::field::{Field, FieldName};
use crate::ordering;
use crate::project::{ProjectStatus, ProjectType};
use crate::schema::{Schema, ValueKind};
use crate::validate::validate_value;
use crate::value::FieldValue;

/// A validated project description.
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static Schema,
    fields: BTreeMap<Field, FieldValue>,
}

impl Record {
    /// Build a record from a raw JSON mapping.
    ///
    /// Every entry is canonicalized and written with validation, then every
    /// required field is checked for a non-empty value.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] raised by a write, or
    /// [`ValueError::RequiredValue`] for the first required field left empty.
    pub fn new(
        schema: &'static Schema,
        raw: &serde_json::Map<String, Value>,
    ) -> Result<Self, ValidationError> {
        Self::from_pairs(schema, raw.iter().map(|(name, value)| (name.as_str(), value)))
    }

    /// Build a record from `(name, raw value)` pairs. When two names
    /// canonicalize to the same field, the later pair wins.
    pub fn from_pairs<'a, N, I>(schema: &'static Schema, pairs: I) -> Result<Self, ValidationError>
    where
        N: FieldName,
        I: IntoIterator<Item = (N, &'a Value)>,
    {
        let mut record = Self::empty(schema);
        for (name, value) in pairs {
            record.set_json(name, value)?;
        }
        record.check_required()?;
        Ok(record)
    }

    /// Build a record from already-typed values.
    pub fn from_values<N, I>(schema: &'static Schema, values: I) -> Result<Self, ValidationError>
    where
        N: FieldName,
        I: IntoIterator<Item = (N, FieldValue)>,
    {
        let mut record = Self::empty(schema);
        for (name, value) in values {
            record.set(name, value)?;
        }
        record.check_required()?;
        Ok(record)
    }

    fn empty(schema: &'static Schema) -> Self {
        Self {
            schema,
            fields: BTreeMap::new(),
        }
    }

    fn check_required(&self) -> Result<(), ValidationError> {
        for field in self.schema.required_fields() {
            if self.value(field).map_or(true, FieldValue::is_empty) {
                return Err(ValueError::RequiredValue.for_field(field));
            }
        }
        Ok(())
    }

    /// The schema every write is validated against.
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Current value of a field addressed by name or identifier.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownField`] if the name is not a schema field.
    pub fn get(&self, name: impl FieldName) -> Result<Option<&FieldValue>, ValidationError> {
        let field = self.schema.canonicalize(name)?;
        Ok(self.value(field))
    }

    /// Current value of a canonical field; `None` if never set.
    pub fn value(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Current value of a canonical field if it is a string scalar.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.value(field).and_then(FieldValue::as_text)
    }

    /// Validate and store a typed value.
    ///
    /// # Errors
    ///
    /// The canonicalization or validation failure. The record is unchanged.
    pub fn set(
        &mut self,
        name: impl FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<(), ValidationError> {
        let field = self.schema.canonicalize(name)?;
        self.write(field, Some(value.into()))
    }

    /// Validate and store a raw JSON value. `null` clears an optional field.
    ///
    /// # Errors
    ///
    /// The canonicalization, classification or validation failure. The
    /// record is unchanged.
    pub fn set_json(&mut self, name: impl FieldName, raw: &Value) -> Result<(), ValidationError> {
        let field = self.schema.canonicalize(name)?;
        let value = FieldValue::from_json(raw).map_err(|reason| reason.for_field(field))?;
        self.write(field, value)
    }

    fn write(&mut self, field: Field, value: Option<FieldValue>) -> Result<(), ValidationError> {
        let rule = self.schema.rule(field);
        let value = match value {
            Some(v) if self.schema.coerces_scalars_to_lists() && rule.kind() == ValueKind::List => {
                Some(v.into_list())
            }
            other => other,
        };
        validate_value(value.as_ref(), rule).map_err(|reason| reason.for_field(field))?;
        match value {
            Some(v) => self.fields.insert(field, v),
            None => self.fields.remove(&field),
        };
        Ok(())
    }

    /// Whether the record's type equals `project_type`, ignoring its case.
    pub fn is_type(&self, project_type: &str) -> bool {
        self.text(Field::Type) == Some(project_type.to_lowercase().as_str())
    }

    /// Whether the record's status equals `status`, ignoring its case.
    pub fn is_status(&self, status: &str) -> bool {
        self.text(Field::Status) == Some(status.to_lowercase().as_str())
    }

    /// The type as an enumeration value, if set.
    pub fn project_type(&self) -> Option<ProjectType> {
        self.text(Field::Type)?.parse().ok()
    }

    /// The status as an enumeration value, if set.
    pub fn project_status(&self) -> Option<ProjectStatus> {
        self.text(Field::Status)?.parse().ok()
    }

    /// Position of the type in rank order; `None` if absent or unrecognized.
    pub fn type_rank(&self) -> Option<usize> {
        self.project_type().map(ProjectType::rank)
    }

    /// Position of the status in rank order; `None` if absent or unrecognized.
    pub fn status_rank(&self) -> Option<usize> {
        self.project_status().map(ProjectStatus::rank)
    }

    /// Owned snapshot of every stored field.
    pub fn to_map(&self) -> BTreeMap<Field, FieldValue> {
        self.fields.clone()
    }

    /// Owned `(lowercase name, value)` pairs in schema order.
    pub fn to_list(&self) -> Vec<(&'static str, FieldValue)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value.clone()))
            .collect()
    }

    /// The record as a JSON object keyed by lowercase field name.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(field, value)| (field.as_str().to_string(), value.to_json()))
                .collect(),
        )
    }

    /// Display ordering: type rank, then status rank, then name.
    pub fn display_cmp(&self, other: &Record) -> Ordering {
        ordering::display_cmp(self, other)
    }
}

/// Equal when the stored fields are equal.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}
