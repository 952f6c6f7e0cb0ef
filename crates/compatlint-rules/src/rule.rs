//! Rule registration contract.
//!
//! Every rule exposes the same surface so the driver can run all of them over
//! all records without knowing what any one rule checks.

use crate::logger::Logger;
use compatlint_data::FeatureRecord;
use serde::Serialize;

/// What kind of input a rule is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RuleScope {
    /// One `__compat` record at a time.
    Feature,
}

impl std::fmt::Display for RuleScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feature => write!(f, "feature"),
        }
    }
}

/// A record together with the context a rule may consult.
#[derive(Debug, Clone, Copy)]
pub struct FeatureTarget<'a> {
    /// Fully-qualified dotted identifier, e.g. `api.AbortController.signal`.
    pub identifier: &'a str,
    pub record: &'a FeatureRecord,
}

impl<'a> FeatureTarget<'a> {
    pub fn new(identifier: &'a str, record: &'a FeatureRecord) -> Self {
        Self { identifier, record }
    }
}

/// A lint rule.
///
/// `check` must be a pure function of its target and the snapshots the rule
/// was constructed with; it reports only through `logger`.
pub trait Rule: Send + Sync {
    /// Stable name, used in reports and on the command line.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn scope(&self) -> RuleScope {
        RuleScope::Feature
    }

    /// Fully-qualified identifiers whose findings from this rule are
    /// suppressed. Matched exactly.
    fn exceptions(&self) -> &[String] {
        &[]
    }

    fn check(&self, logger: &mut dyn Logger, target: FeatureTarget<'_>);

    fn is_exempt(&self, identifier: &str) -> bool {
        self.exceptions().iter().any(|exempt| exempt == identifier)
    }

    fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            scope: self.scope(),
            exceptions: self.exceptions().to_vec(),
        }
    }
}

/// Serializable summary of a registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDescriptor {
    pub name: String,
    pub description: String,
    pub scope: RuleScope,
    pub exceptions: Vec<String>,
}
