//! Canonical specification catalog (browser-specs `index.json` layout).

use crate::error::DataError;
use crate::json_files::read_json;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightlyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_urls: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_url: Option<String>,
}

/// One catalog entry. Only the URL-bearing fields are modeled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDescriptor {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly: Option<NightlyInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesInfo>,
}

impl SpecDescriptor {
    /// Primary URL, nightly URL, alternate nightly URLs and the series'
    /// rolling nightly URL, in that order. Absent sources are skipped.
    pub fn candidate_urls(&self) -> impl Iterator<Item = &str> {
        let nightly = self.nightly.as_ref();
        std::iter::once(self.url.as_str())
            .chain(nightly.and_then(|n| n.url.as_deref()))
            .chain(
                nightly
                    .map(|n| n.alternate_urls.as_slice())
                    .unwrap_or_default()
                    .iter()
                    .map(String::as_str),
            )
            .chain(
                self.series
                    .as_ref()
                    .and_then(|series| series.nightly_url.as_deref()),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecCatalog {
    specs: Vec<SpecDescriptor>,
}

impl SpecCatalog {
    pub fn new(specs: Vec<SpecDescriptor>) -> Self {
        Self { specs }
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let value = read_json(path)?;
        let catalog = Self::from_value(value).map_err(|source| DataError::ParseJson {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            specs = catalog.specs.len(),
            "loaded spec catalog"
        );
        Ok(catalog)
    }

    pub fn specs(&self) -> &[SpecDescriptor] {
        &self.specs
    }

    /// Every candidate URL of every descriptor, duplicates included.
    pub fn candidate_urls(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().flat_map(SpecDescriptor::candidate_urls)
    }
}
