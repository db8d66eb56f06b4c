#![deny(missing_docs)]

//! # civic-core: Validated Civic Project Records
//!
//! This crate defines the record model for human-authored civic project
//! descriptions. A record is a mapping from a fixed set of fields to values,
//! and every write to it is checked against a declarative schema table.
//!
//! ## Key Design Principles
//!
//! 1. **Schema as data.** The field rules live in one constant table
//!    ([`schema`]). Canonicalization and validation consume that table
//!    uniformly; there is no per-field code.
//!
//! 2. **Closed field set.** [`Field`] is a single enum. Callers may address
//!    fields by any casing of their name; anything outside the enum is an
//!    [`ValidationError::UnknownField`].
//!
//! 3. **Scalar vs. list decided at the boundary.** Raw input is classified
//!    once into a [`FieldValue`] when it is written. Checks never inspect
//!    dynamic shapes after that.
//!
//! 4. **Validation at write time.** [`Record::set`] and construction either
//!    succeed completely or leave no trace, so an invalid [`Record`] cannot
//!    be observed through the public interface.
//!
//! 5. **Ranked enumerations.** [`ProjectType`] and [`ProjectStatus`] carry
//!    the display rank used by [`ordering`].
//!
//! ## Crate Policy
//!
//! - No I/O. Reading project files belongs to `civic-loader`.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod field;
pub mod ordering;
pub mod project;
pub mod record;
pub mod schema;
pub mod validate;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{ValidationError, ValidationErrorKind, ValueError};
pub use field::{Field, FieldName, FIELD_COUNT};
pub use ordering::{display_cmp, sort_for_display, UNRANKED};
pub use project::{ProjectStatus, ProjectType};
pub use record::Record;
pub use schema::{FieldRule, FieldSpec, Schema, SchemaError, ValueKind};
pub use validate::validate_value;
pub use value::{FieldValue, Scalar};
