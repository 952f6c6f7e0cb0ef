//! Feature tree loading.
//!
//! Compat data is a nested JSON object keyed by path segment. Any object
//! holding a `__compat` key is a feature; its fully-qualified identifier is the
//! dotted path from the root (`api.AbortController.signal`).

use crate::error::DataError;
use crate::json_files::{collect_json_files, read_json};
use crate::support::FeatureRecord;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

pub const COMPAT_KEY: &str = "__compat";

/// Top-level keys that hold other data sets, not features.
const NON_FEATURE_ROOTS: &[&str] = &["browsers", "$schema"];

/// Directories under a dataset root that never hold feature files.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "browsers", "schemas", "build"];

/// Every feature of a dataset, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatTree {
    entries: BTreeMap<String, FeatureRecord>,
}

impl CompatTree {
    /// Load every JSON file under `path` (or the single file it names).
    ///
    /// Hidden entries and [`EXCLUDED_DIRS`] are skipped, so a dataset
    /// checkout can be loaded from its root. The same identifier defined in
    /// two places is a `MergeConflict`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let mut tree = Self::default();
        let files = collect_json_files(path, EXCLUDED_DIRS)?;
        for file in &files {
            let value = read_json(file)?;
            tree.absorb(&file.display().to_string(), &value)?;
        }
        tracing::debug!(
            path = %path.display(),
            files = files.len(),
            features = tree.len(),
            "loaded compat tree"
        );
        Ok(tree)
    }

    /// Build a tree from one in-memory document. `source` labels errors.
    pub fn from_value(source: &str, value: &Value) -> Result<Self, DataError> {
        let mut tree = Self::default();
        tree.absorb(source, value)?;
        Ok(tree)
    }

    fn absorb(&mut self, source: &str, value: &Value) -> Result<(), DataError> {
        let Value::Object(root) = value else {
            return Err(DataError::Layout {
                path: source.to_string(),
                description: "top-level value must be an object".to_string(),
            });
        };
        for (key, child) in root {
            if NON_FEATURE_ROOTS.contains(&key.as_str()) {
                continue;
            }
            if let Value::Object(child) = child {
                self.walk(source, key, child)?;
            }
        }
        Ok(())
    }

    fn walk(
        &mut self,
        source: &str,
        identifier: &str,
        node: &Map<String, Value>,
    ) -> Result<(), DataError> {
        for (key, child) in node {
            if key == COMPAT_KEY {
                let record = FeatureRecord::deserialize(child).map_err(|error| {
                    DataError::InvalidRecord {
                        identifier: identifier.to_string(),
                        path: source.to_string(),
                        source: error,
                    }
                })?;
                if self.entries.insert(identifier.to_string(), record).is_some() {
                    return Err(DataError::MergeConflict {
                        identifier: identifier.to_string(),
                        path: source.to_string(),
                    });
                }
            } else if let Value::Object(child) = child {
                self.walk(source, &format!("{identifier}.{key}"), child)?;
            }
        }
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&FeatureRecord> {
        self.entries.get(identifier)
    }

    /// Records in identifier order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &FeatureRecord)> {
        self.entries
            .iter()
            .map(|(identifier, record)| (identifier.as_str(), record))
    }

    /// Keep only identifiers equal to `prefix` or nested below it.
    pub fn retain_prefix(&mut self, prefix: &str) {
        self.entries.retain(|identifier, _| {
            identifier == prefix
                || identifier
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('.'))
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
