//! Runtime release registry: browser id → version → release date.

use crate::error::DataError;
use crate::json_files::{collect_json_files, read_json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Leading marker on ranged versions (`≤37` means "37 or earlier").
pub const RANGED_VERSION_PREFIX: char = '≤';

/// Read-only release-date lookup consumed by the obsolescence rule.
///
/// Unknown runtimes and versions answer `None`; callers treat that as
/// "release date unknown", never as an error.
pub trait ReleaseDates {
    fn release_date(&self, runtime: &str, version: &str) -> Option<NaiveDate>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub releases: BTreeMap<String, ReleaseInfo>,
}

#[derive(Debug, Deserialize)]
struct BrowsersFile {
    browsers: BTreeMap<String, BrowserInfo>,
}

/// All known runtimes and their releases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrowserRegistry {
    browsers: BTreeMap<String, BrowserInfo>,
}

impl BrowserRegistry {
    pub fn new(browsers: BTreeMap<String, BrowserInfo>) -> Self {
        Self { browsers }
    }

    /// Decode one `{ "browsers": { ... } }` document.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let file: BrowsersFile = serde_json::from_value(value)?;
        Ok(Self::new(file.browsers))
    }

    /// Load a single browsers file, or every JSON file under a directory.
    ///
    /// Releases of the same runtime spread over several files are merged;
    /// later files win on duplicate versions.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let mut registry = Self::default();
        for file in collect_json_files(path, &[])? {
            let value = read_json(&file)?;
            let parsed: BrowsersFile =
                serde_json::from_value(value).map_err(|source| DataError::ParseJson {
                    path: file.display().to_string(),
                    source,
                })?;
            for (id, info) in parsed.browsers {
                registry.insert(id, info);
            }
        }
        tracing::debug!(
            path = %path.display(),
            browsers = registry.len(),
            "loaded browser registry"
        );
        Ok(registry)
    }

    pub fn insert(&mut self, id: String, info: BrowserInfo) {
        match self.browsers.get_mut(&id) {
            Some(existing) => {
                if info.name.is_some() {
                    existing.name = info.name;
                }
                existing.releases.extend(info.releases);
            }
            None => {
                self.browsers.insert(id, info);
            }
        }
    }

    pub fn browser(&self, id: &str) -> Option<&BrowserInfo> {
        self.browsers.get(id)
    }

    pub fn len(&self) -> usize {
        self.browsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }
}

impl ReleaseDates for BrowserRegistry {
    fn release_date(&self, runtime: &str, version: &str) -> Option<NaiveDate> {
        let version = version.trim_start_matches(RANGED_VERSION_PREFIX);
        self.browsers
            .get(runtime)?
            .releases
            .get(version)?
            .release_date
    }
}
