//! # Project Description Schema
//!
//! The complete rule set for project descriptions, declared as one constant
//! table of [`FieldSpec`] rows. Nothing else in the crate knows which
//! fields are required or constrained: canonicalization, validation and the
//! required-field audit all read this table.
//!
//! | Field       | Required | Kind   | Constraint                      |
//! |-------------|----------|--------|---------------------------------|
//! | key         | yes      | scalar |                                 |
//! | name        | yes      | scalar |                                 |
//! | description | yes      | scalar | ends with a period              |
//! | access_at   | no       | scalar | `http://` or `https://` URL     |
//! | project_at  | no       | scalar | `http://` or `https://` URL     |
//! | type        | yes      | scalar | one of [`PROJECT_TYPE_NAMES`]   |
//! | status      | yes      | scalar | one of [`PROJECT_STATUS_NAMES`] |
//! | categories  | no       | list   |                                 |
//! | contact     | no       | scalar |                                 |
//!
//! Patterns are unanchored regex searches compiled in multi-line mode, so
//! `^` and `$` match at line boundaries as well as at the ends of the text.
//! A YAML block scalar ends in `\n`; `\.$` still sees its final period.
//!
//! ## Variants
//!
//! The table compiles into two process-wide schemas that differ only in
//! list handling: [`Schema::civic_project`] rejects a bare scalar written to
//! a list field, [`Schema::civic_project_lenient`] wraps it into a
//! one-element list before validating.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use thiserror::Error;

use crate::error::ValidationError;
use crate::field::{Field, FieldName, FIELD_COUNT};
use crate::project::{PROJECT_STATUS_NAMES, PROJECT_TYPE_NAMES};

/// Whether a field holds one scalar or a list of scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// One string, number or boolean.
    Scalar,
    /// An ordered list of scalars.
    List,
}

/// One declarative row of a schema table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// The field this row constrains.
    pub field: Field,
    /// Whether a constructed record must hold a non-empty value.
    pub required: bool,
    /// Scalar or list.
    pub kind: ValueKind,
    /// Closed set of permitted text values.
    pub allowed: Option<&'static [&'static str]>,
    /// Regex every scalar must match.
    pub pattern: Option<&'static str>,
}

const HTTP_URL: &str = r"^https?://";

/// The project description schema. Row order must match [`Field::all`].
pub const CIVIC_PROJECT_FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec {
        field: Field::Key,
        required: true,
        kind: ValueKind::Scalar,
        allowed: None,
        pattern: None,
    },
    FieldSpec {
        field: Field::Name,
        required: true,
        kind: ValueKind::Scalar,
        allowed: None,
        pattern: None,
    },
    FieldSpec {
        field: Field::Description,
        required: true,
        kind: ValueKind::Scalar,
        allowed: None,
        pattern: Some(r"\.$"),
    },
    FieldSpec {
        field: Field::AccessAt,
        required: false,
        kind: ValueKind::Scalar,
        allowed: None,
        pattern: Some(HTTP_URL),
    },
    FieldSpec {
        field: Field::ProjectAt,
        required: false,
        kind: ValueKind::Scalar,
        allowed: None,
        pattern: Some(HTTP_URL),
    },
    FieldSpec {
        field: Field::Type,
        required: true,
        kind: ValueKind::Scalar,
        allowed: Some(PROJECT_TYPE_NAMES),
        pattern: None,
    },
    FieldSpec {
        field: Field::Status,
        required: true,
        kind: ValueKind::Scalar,
        allowed: Some(PROJECT_STATUS_NAMES),
        pattern: None,
    },
    FieldSpec {
        field: Field::Categories,
        required: false,
        kind: ValueKind::List,
        allowed: None,
        pattern: None,
    },
    FieldSpec {
        field: Field::Contact,
        required: false,
        kind: ValueKind::Scalar,
        allowed: None,
        pattern: None,
    },
];

/// Compiled validation rule for one field.
///
/// When both a pattern and list kind are set, the pattern applies to every
/// list element, the same way allowed values do.
#[derive(Debug, Clone)]
pub struct FieldRule {
    required: bool,
    kind: ValueKind,
    allowed: Option<BTreeSet<String>>,
    pattern: Option<Regex>,
}

impl FieldRule {
    /// An optional, unconstrained rule of the given kind.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            required: false,
            kind,
            allowed: None,
            pattern: None,
        }
    }

    /// Shorthand for `FieldRule::new(ValueKind::Scalar)`.
    pub fn scalar() -> Self {
        Self::new(ValueKind::Scalar)
    }

    /// Shorthand for `FieldRule::new(ValueKind::List)`.
    pub fn list() -> Self {
        Self::new(ValueKind::List)
    }

    /// Reject empty values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict values to the given set.
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Require values to match `pattern` (unanchored, multi-line search).
    pub fn matching(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(RegexBuilder::new(pattern).multi_line(true).build()?);
        Ok(self)
    }

    /// Whether empty values are rejected.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Expected value shape.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Permitted text values, if the rule restricts them.
    pub fn allowed_values(&self) -> Option<&BTreeSet<String>> {
        self.allowed.as_ref()
    }

    /// Compiled pattern, if any.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    fn compile(spec: &FieldSpec) -> Result<Self, SchemaError> {
        let mut rule = Self::new(spec.kind);
        rule.required = spec.required;
        if let Some(values) = spec.allowed {
            rule = rule.one_of(values.iter().copied());
        }
        if let Some(pattern) = spec.pattern {
            rule = rule
                .matching(pattern)
                .map_err(|source| SchemaError::InvalidPattern {
                    field: spec.field,
                    source,
                })?;
        }
        Ok(rule)
    }
}

/// A schema table that failed to compile.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A row's pattern is not a valid regex.
    #[error("invalid pattern for field {field}: {source}")]
    InvalidPattern {
        /// Row whose pattern failed.
        field: Field,
        /// Compiler error from `regex`.
        source: regex::Error,
    },

    /// Rows are not in [`Field::all`] order.
    #[error("schema row {position} declares {found}, expected {expected}")]
    FieldOrder {
        /// Zero-based row index.
        position: usize,
        /// Field declared at this position.
        expected: Field,
        /// Field the row actually names.
        found: Field,
    },
}

/// An immutable, ordered mapping from every [`Field`] to its [`FieldRule`].
#[derive(Debug)]
pub struct Schema {
    rules: Vec<FieldRule>,
    coerce_scalars_to_lists: bool,
}

static CIVIC_PROJECT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::compile(&CIVIC_PROJECT_FIELDS, false).expect("built-in project schema must compile")
});

static CIVIC_PROJECT_LENIENT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::compile(&CIVIC_PROJECT_FIELDS, true).expect("built-in project schema must compile")
});

impl Schema {
    /// The project schema with strict list typing.
    pub fn civic_project() -> &'static Schema {
        &CIVIC_PROJECT
    }

    /// The project schema that wraps a scalar written to a list field into a
    /// one-element list.
    pub fn civic_project_lenient() -> &'static Schema {
        &CIVIC_PROJECT_LENIENT
    }

    /// Compile a full table. Rows must cover every [`Field`] in declared
    /// order so that lookups by field can never miss.
    pub(crate) fn compile(
        specs: &[FieldSpec; FIELD_COUNT],
        coerce_scalars_to_lists: bool,
    ) -> Result<Self, SchemaError> {
        let mut rules = Vec::with_capacity(FIELD_COUNT);
        for (position, (spec, expected)) in specs.iter().zip(Field::all()).enumerate() {
            if spec.field != *expected {
                return Err(SchemaError::FieldOrder {
                    position,
                    expected: *expected,
                    found: spec.field,
                });
            }
            rules.push(FieldRule::compile(spec)?);
        }
        Ok(Self {
            rules,
            coerce_scalars_to_lists,
        })
    }

    /// Canonicalize a field name against this schema.
    pub fn canonicalize(&self, name: impl FieldName) -> Result<Field, ValidationError> {
        name.to_field()
    }

    /// The rule for `field`. Every field has one.
    pub fn rule(&self, field: Field) -> &FieldRule {
        &self.rules[field.index()]
    }

    /// Every field with its rule, in declared order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &FieldRule)> + '_ {
        Field::all().iter().copied().zip(self.rules.iter())
    }

    /// Fields that must be non-empty, in declared order.
    pub fn required_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields()
            .filter(|(_, rule)| rule.is_required())
            .map(|(field, _)| field)
    }

    /// Whether a scalar written to a list field is wrapped rather than rejected.
    pub fn coerces_scalars_to_lists(&self) -> bool {
        self.coerce_scalars_to_lists
    }
}
