//! Error types for dataset loading.

/// Errors arising while reading or decoding compatibility data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json at {path}: {source}")]
    ParseJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A `__compat` block does not match the record model.
    #[error("invalid compat record {identifier} in {path}: {source}")]
    InvalidRecord {
        identifier: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two `__compat` blocks resolve to the same identifier.
    #[error("conflicting definitions for {identifier} in {path}")]
    MergeConflict { identifier: String, path: String },

    #[error("unexpected data layout in {path}: {description}")]
    Layout { path: String, description: String },
}
