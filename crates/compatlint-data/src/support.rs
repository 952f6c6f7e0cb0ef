//! Feature records and their per-runtime support statements.
//!
//! The on-disk shape mixes single values and sequences (one support entry or
//! a history of them, one spec URL or several) and booleans with version
//! strings. Everything here deserializes that shape as-is and exposes slice
//! views so rule code never branches on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value that is written either bare or as an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

/// `version_added` / `version_removed` payload: a version string or a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionValue {
    Flag(bool),
    Version(String),
}

impl VersionValue {
    /// A non-empty version string or `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Version(version) => !version.is_empty(),
        }
    }

    /// The concrete version, when one is recorded.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Version(version) => Some(version),
            Self::Flag(_) => None,
        }
    }
}

/// One structured support data point for a runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportStatement {
    #[serde(default)]
    pub version_added: Option<VersionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_removed: Option<VersionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_implementation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<OneOrMany<String>>,
}

/// A support entry: boolean shorthand or a structured statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupportEntry {
    Flag(bool),
    Statement(SupportStatement),
}

impl SupportEntry {
    pub fn is_added(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Statement(statement) => statement
                .version_added
                .as_ref()
                .is_some_and(VersionValue::is_truthy),
        }
    }

    /// The concrete removal version.
    ///
    /// `None` when removal is absent or only flagged with a boolean; such
    /// entries cannot be dated.
    pub fn removed_version(&self) -> Option<&str> {
        match self {
            Self::Flag(_) => None,
            Self::Statement(statement) => statement
                .version_removed
                .as_ref()
                .and_then(VersionValue::version),
        }
    }
}

/// Runtime identifier → one entry or a history of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportBlock(pub BTreeMap<String, OneOrMany<SupportEntry>>);

impl SupportBlock {
    /// Iterate runtimes in identifier order with their entries as a slice.
    pub fn runtimes(&self) -> impl Iterator<Item = (&str, &[SupportEntry])> {
        self.0
            .iter()
            .map(|(runtime, entries)| (runtime.as_str(), entries.as_slice()))
    }

    /// Every entry of every runtime.
    pub fn entries(&self) -> impl Iterator<Item = &SupportEntry> {
        self.0.values().flat_map(OneOrMany::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, OneOrMany<SupportEntry>)> for SupportBlock {
    fn from_iter<I: IntoIterator<Item = (String, OneOrMany<SupportEntry>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_track: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

/// The `__compat` payload for one tracked feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mdn_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_url: Option<OneOrMany<String>>,
    pub support: SupportBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl FeatureRecord {
    /// Spec URLs in display order; empty when none are recorded.
    pub fn spec_urls(&self) -> &[String] {
        self.spec_url
            .as_ref()
            .map(OneOrMany::as_slice)
            .unwrap_or_default()
    }

    /// True only when `status.standard_track` is recorded as `false`.
    pub fn is_abandoned(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|status| status.standard_track)
            == Some(false)
    }
}
