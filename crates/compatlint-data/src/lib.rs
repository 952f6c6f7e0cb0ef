//! # compatlint-data
//!
//! Read-only inputs for the lint rules.
//!
//! This crate provides:
//! - `FeatureRecord` and its support model (the records under check)
//! - `CompatTree` (feature tree loading, dotted identifiers)
//! - `BrowserRegistry` and the `ReleaseDates` lookup seam
//! - `SpecCatalog` (canonical specification descriptors)
//!
//! It never judges data; the rules live in `compatlint-rules`.
//!
//! ## Data model
//!
//! ```text
//! data/**/*.json ──walk──► CompatTree ──► (identifier, FeatureRecord)
//! browsers/*.json ───────► BrowserRegistry: runtime × version → date
//! specs index.json ──────► SpecCatalog: candidate spec URLs
//! ```

pub mod browsers;
pub mod compat_tree;
pub mod error;
mod json_files;
pub mod specs;
pub mod support;

pub use browsers::{
    BrowserInfo, BrowserRegistry, RANGED_VERSION_PREFIX, ReleaseDates, ReleaseInfo,
};
pub use compat_tree::{COMPAT_KEY, CompatTree, EXCLUDED_DIRS};
pub use error::DataError;
pub use specs::{NightlyInfo, SeriesInfo, SpecCatalog, SpecDescriptor};
pub use support::{
    FeatureRecord, OneOrMany, Status, SupportBlock, SupportEntry, SupportStatement, VersionValue,
};
