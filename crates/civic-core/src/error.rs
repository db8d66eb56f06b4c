//! # Error Types
//!
//! Two layers, both derived with `thiserror`:
//!
//! - [`ValueError`] is the reason a single value was rejected by a field
//!   rule. It knows nothing about which field was being written.
//! - [`ValidationError`] is what callers see. Every rejection raised by a
//!   record write is annotated with the field it was addressed to, so the
//!   message names both the field and the reason.

use thiserror::Error;

use crate::field::Field;

/// Reason a candidate value does not satisfy a field rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The field is required but the value is absent, `""`, or `[]`.
    #[error("value cannot be empty")]
    RequiredValue,

    /// The raw value is neither a scalar nor a list of scalars.
    #[error("bad value type \"{found}\"")]
    InvalidValueType {
        /// JSON type name of the offending value.
        found: &'static str,
    },

    /// A list was written to a scalar field.
    #[error("scalar value required")]
    ScalarExpected,

    /// A scalar was written to a list field.
    #[error("list value required")]
    ListExpected,

    /// A scalar (or list element) is not in the rule's allowed set.
    #[error("value \"{value}\" not allowed")]
    DisallowedValue {
        /// The first value found outside the allowed set.
        value: String,
    },

    /// A scalar (or list element) does not match the rule's pattern.
    #[error("value \"{value}\" does not match expected format")]
    FormatMismatch {
        /// The stringified value that failed to match.
        value: String,
    },
}

/// Validation failure raised by canonicalization or a record write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name does not canonicalize to a schema field.
    #[error("unknown field \"{name}\"")]
    UnknownField {
        /// The name exactly as the caller supplied it.
        name: String,
    },

    /// A value was rejected for a known field.
    #[error("{reason} for field {field}")]
    InvalidValue {
        /// The canonical field the write was addressed to.
        field: Field,
        /// Why the value was rejected.
        reason: ValueError,
    },
}

/// Flat discriminant over every way validation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// [`ValidationError::UnknownField`].
    UnknownField,
    /// [`ValueError::RequiredValue`].
    RequiredValue,
    /// [`ValueError::InvalidValueType`].
    InvalidValueType,
    /// [`ValueError::ScalarExpected`].
    ScalarExpected,
    /// [`ValueError::ListExpected`].
    ListExpected,
    /// [`ValueError::DisallowedValue`].
    DisallowedValue,
    /// [`ValueError::FormatMismatch`].
    FormatMismatch,
}

impl ValueError {
    /// Attach the field that was being written.
    pub fn for_field(self, field: Field) -> ValidationError {
        ValidationError::InvalidValue {
            field,
            reason: self,
        }
    }

    /// Discriminant without the payload.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::RequiredValue => ValidationErrorKind::RequiredValue,
            Self::InvalidValueType { .. } => ValidationErrorKind::InvalidValueType,
            Self::ScalarExpected => ValidationErrorKind::ScalarExpected,
            Self::ListExpected => ValidationErrorKind::ListExpected,
            Self::DisallowedValue { .. } => ValidationErrorKind::DisallowedValue,
            Self::FormatMismatch { .. } => ValidationErrorKind::FormatMismatch,
        }
    }
}

impl ValidationError {
    /// Discriminant of the underlying failure.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::UnknownField { .. } => ValidationErrorKind::UnknownField,
            Self::InvalidValue { reason, .. } => reason.kind(),
        }
    }

    /// The field a rejected value was written to, if the name was known.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::UnknownField { .. } => None,
            Self::InvalidValue { field, .. } => Some(*field),
        }
    }
}
