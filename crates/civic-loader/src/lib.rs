//! # civic-loader
//!
//! Reads civic project description files from disk and turns each one into
//! a validated [`civic_core::Record`].
//!
//! - [`parser`]: YAML to a raw `serde_json` field mapping.
//! - [`loader`]: single-file and directory loading with key injection.
//! - [`config`]: which files are scanned and which schema applies.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let records = civic_loader::load_dir(Path::new("projects"))?;
//! for record in &records {
//!     println!("{}", record.to_json());
//! }
//! # Ok::<(), civic_loader::LoadError>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod parser;

pub use config::LoaderConfig;
pub use error::{LoadError, LoadResult};
pub use loader::{load_dir, load_dir_with, load_file};
pub use parser::parse_project_yaml;
