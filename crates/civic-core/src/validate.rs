//! # Value Validation
//!
//! Checks one candidate value against one [`FieldRule`]. Steps run in a
//! fixed order and the first failure wins:
//!
//! 1. Emptiness: an absent value, `""` or `[]` fails only if the rule is
//!    required. An empty optional value passes without further checks.
//! 2. Kind: classification into scalar or list already happened when the
//!    value entered the model ([`FieldValue::from_json`]), which is where
//!    unsupported shapes are rejected.
//! 3. Kind match against the rule.
//! 4. Allowed values, per scalar (each list element individually).
//! 5. Pattern, per stringified scalar.
//!
//! The returned [`ValueError`] does not name a field; the record write that
//! called in attaches it.

use crate::error::ValueError;
use crate::schema::{FieldRule, ValueKind};
use crate::value::FieldValue;

/// Validate `value` against `rule`.
///
/// # Errors
///
/// The first [`ValueError`] encountered, in the order documented on the
/// module.
pub fn validate_value(value: Option<&FieldValue>, rule: &FieldRule) -> Result<(), ValueError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ if rule.is_required() => return Err(ValueError::RequiredValue),
        _ => return Ok(()),
    };

    match (value.kind(), rule.kind()) {
        (ValueKind::List, ValueKind::Scalar) => return Err(ValueError::ScalarExpected),
        (ValueKind::Scalar, ValueKind::List) => return Err(ValueError::ListExpected),
        _ => {}
    }

    if let Some(allowed) = rule.allowed_values() {
        // Only text can be a member of a string enumeration.
        if let Some(outsider) = value
            .scalars()
            .iter()
            .find(|s| !s.as_text().is_some_and(|t| allowed.contains(t)))
        {
            return Err(ValueError::DisallowedValue {
                value: outsider.to_string(),
            });
        }
    }

    if let Some(pattern) = rule.pattern() {
        for scalar in value.scalars() {
            let text = scalar.to_string();
            if !pattern.is_match(&text) {
                return Err(ValueError::FormatMismatch { value: text });
            }
        }
    }

    Ok(())
}
