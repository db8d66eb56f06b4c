//! # Field Values
//!
//! A field holds either one [`Scalar`] or an ordered list of them. The
//! distinction is made once, when raw input crosses into the record model
//! ([`FieldValue::from_json`]); everything downstream matches on the
//! variant instead of probing shapes.
//!
//! Both types serialize untagged, so an exported record reads like the
//! project file it came from.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValueError;
use crate::schema::ValueKind;

/// A single string, number, or boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// `true` or `false`.
    Bool(bool),
    /// Integer or finite float.
    Number(serde_json::Number),
    /// A string, possibly empty.
    Text(String),
}

/// The value stored under one field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Zero or more scalars.
    List(Vec<Scalar>),
    /// Exactly one scalar.
    Scalar(Scalar),
}

impl Scalar {
    /// The text if this is a string scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Only the empty string counts as empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    fn from_json(value: &Value) -> Option<Scalar> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// The equivalent JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FieldValue {
    /// Classify a raw JSON value.
    ///
    /// `null` means "no value" and yields `Ok(None)`. Strings, numbers and
    /// booleans become scalars; arrays whose elements are all scalars
    /// become lists.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidValueType`] for objects, and for arrays holding
    /// anything other than scalars.
    pub fn from_json(value: &Value) -> Result<Option<FieldValue>, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    Scalar::from_json(item).ok_or(ValueError::InvalidValueType {
                        found: json_type_name(item),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|list| Some(Self::List(list))),
            Value::Object(_) => Err(ValueError::InvalidValueType { found: "object" }),
            scalar => Ok(Scalar::from_json(scalar).map(Self::Scalar)),
        }
    }

    /// The equivalent JSON value: a string, number, boolean or array.
    pub fn to_json(&self) -> Value {
        match self {
            Self::List(items) => Value::Array(items.iter().map(Scalar::to_json).collect()),
            Self::Scalar(s) => s.to_json(),
        }
    }

    /// Scalar or list.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::List(_) => ValueKind::List,
            Self::Scalar(_) => ValueKind::Scalar,
        }
    }

    /// `""` and `[]` are empty; every other value is not.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Scalar(s) => s.is_empty(),
        }
    }

    /// The individual scalars: the value itself, or each list element.
    pub fn scalars(&self) -> &[Scalar] {
        match self {
            Self::List(items) => items,
            Self::Scalar(s) => std::slice::from_ref(s),
        }
    }

    /// The scalar, unless this is a list.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// The elements, unless this is a scalar.
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Self::List(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }

    /// The text of a string scalar.
    pub fn as_text(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_text)
    }

    /// Wrap a non-empty scalar into a one-element list. Lists and empty
    /// values pass through unchanged.
    pub(crate) fn into_list(self) -> FieldValue {
        match self {
            Self::Scalar(s) if !s.is_empty() => Self::List(vec![s]),
            other => other,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Scalar> for FieldValue {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Scalar(b.into())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<Vec<Scalar>> for FieldValue {
    fn from(items: Vec<Scalar>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(Scalar::from).collect())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items.into_iter().map(Scalar::from).collect())
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_no_value() {
        assert_eq!(FieldValue::from_json(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_scalars_classified() {
        assert_eq!(
            FieldValue::from_json(&json!("beta")).unwrap(),
            Some(FieldValue::from("beta"))
        );
        assert_eq!(
            FieldValue::from_json(&json!(42)).unwrap(),
            Some(FieldValue::from(42i64))
        );
        assert_eq!(
            FieldValue::from_json(&json!(true)).unwrap(),
            Some(FieldValue::from(true))
        );
    }

    #[test]
    fn test_list_classified() {
        let value = FieldValue::from_json(&json!(["food safety", 3])).unwrap().unwrap();
        assert_eq!(value.kind(), ValueKind::List);
        assert_eq!(value.scalars().len(), 2);
        assert_eq!(value.scalars()[1], Scalar::from(3i64));
    }

    #[test]
    fn test_object_rejected() {
        let err = FieldValue::from_json(&json!({"a": 1})).unwrap_err();
        assert_eq!(err, ValueError::InvalidValueType { found: "object" });
    }

    #[test]
    fn test_nested_list_rejected() {
        let err = FieldValue::from_json(&json!([["a"]])).unwrap_err();
        assert_eq!(err, ValueError::InvalidValueType { found: "array" });
        let err = FieldValue::from_json(&json!(["a", null])).unwrap_err();
        assert_eq!(err, ValueError::InvalidValueType { found: "null" });
    }

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::from(" ").is_empty());
        assert!(!FieldValue::from(0i64).is_empty());
        assert!(!FieldValue::from(false).is_empty());
        assert!(!FieldValue::from(vec![""]).is_empty());
    }

    #[test]
    fn test_into_list_wraps_non_empty_scalar() {
        assert_eq!(
            FieldValue::from("food safety").into_list(),
            FieldValue::from(vec!["food safety"])
        );
        assert_eq!(FieldValue::from("").into_list(), FieldValue::from(""));
        let list = FieldValue::from(vec!["a", "b"]);
        assert_eq!(list.clone().into_list(), list);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("beta").to_string(), "beta");
        assert_eq!(FieldValue::from(vec!["a", "b"]).to_string(), "a, b");
        assert_eq!(FieldValue::from(7i64).to_string(), "7");
    }

    #[test]
    fn test_serializes_untagged() {
        let value = FieldValue::from(vec!["food safety"]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(["food safety"]));
        assert_eq!(value.to_json(), json!(["food safety"]));
        let parsed: FieldValue = serde_json::from_value(json!("beta")).unwrap();
        assert_eq!(parsed, FieldValue::from("beta"));
    }
}
