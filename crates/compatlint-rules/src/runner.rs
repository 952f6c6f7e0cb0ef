//! Deterministic driver: run every registered rule over every record.

use crate::finding::{Finding, Severity};
use crate::logger::{FindingBuffer, Logger, Tee, TracingLogger};
use crate::obsolete::ObsoleteRule;
use crate::rule::{FeatureTarget, Rule, RuleDescriptor, RuleScope};
use crate::spec_index::SpecUrlIndex;
use crate::spec_urls::SpecUrlRule;
use chrono::NaiveDate;
use compatlint_data::{FeatureRecord, ReleaseDates};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const LINT_CHECK_KIND: &str = "compatlint.check.v1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordFinding {
    pub identifier: String,
    pub rule: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LintSummary {
    pub record_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub exempted_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LintReport {
    pub check_kind: String,
    pub result: String,
    pub errors: Vec<RecordFinding>,
    pub warnings: Vec<RecordFinding>,
    /// `rule:identifier` exemptions that suppressed nothing.
    pub unused_exceptions: Vec<String>,
    pub summary: LintSummary,
}

impl LintReport {
    pub fn accepted(&self) -> bool {
        self.result == "accepted"
    }
}

/// Ordered collection of rules run as one pass.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
    stream: bool,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The spec-URL and obsolescence rules with their built-in exceptions.
    pub fn with_default_rules<R>(index: SpecUrlIndex, releases: R, today: NaiveDate) -> Self
    where
        R: ReleaseDates + Send + Sync + 'static,
    {
        let mut rules = Self::new();
        rules.push(SpecUrlRule::new(index));
        rules.push(ObsoleteRule::with_default_exceptions(releases, today));
        rules
    }

    pub fn push(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Also stream every surfaced finding as a `tracing` event.
    pub fn streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn descriptors(&self) -> Vec<RuleDescriptor> {
        self.rules().map(|rule| rule.descriptor()).collect()
    }

    /// Run one rule against one record, ignoring exemptions.
    pub fn check_one(&self, rule: &dyn Rule, target: FeatureTarget<'_>) -> Vec<Finding> {
        let mut buffer = FindingBuffer::new();
        if self.stream {
            let mut stream = TracingLogger::new(rule.name(), target.identifier);
            let mut tee = Tee {
                first: &mut buffer,
                second: &mut stream,
            };
            rule.check(&mut tee as &mut dyn Logger, target);
        } else {
            rule.check(&mut buffer, target);
        }
        buffer.into_findings()
    }

    /// Check `records` with every feature-scoped rule.
    ///
    /// Findings on a rule's exempted identifiers are dropped and counted.
    pub fn check<'a, I>(&self, records: I) -> LintReport
    where
        I: IntoIterator<Item = (&'a str, &'a FeatureRecord)>,
    {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut unused_exceptions = BTreeSet::new();
        let mut summary = LintSummary::default();

        for (identifier, record) in records {
            summary.record_count += 1;
            let target = FeatureTarget::new(identifier, record);
            for rule in self.rules() {
                if rule.scope() != RuleScope::Feature {
                    continue;
                }
                let exempt = rule.is_exempt(identifier);
                let findings = if exempt {
                    // Exempt findings are never streamed.
                    let mut buffer = FindingBuffer::new();
                    rule.check(&mut buffer, target);
                    buffer.into_findings()
                } else {
                    self.check_one(rule, target)
                };

                if exempt {
                    if findings.is_empty() {
                        unused_exceptions.insert(format!("{}:{identifier}", rule.name()));
                    }
                    summary.exempted_count += findings.len();
                    continue;
                }

                for finding in findings {
                    let row = RecordFinding {
                        identifier: identifier.to_string(),
                        rule: rule.name().to_string(),
                        message: finding.message,
                        tip: finding.tip,
                    };
                    match finding.severity {
                        Severity::Error => errors.push(row),
                        Severity::Warning => warnings.push(row),
                    }
                }
            }
        }

        summary.error_count = errors.len();
        summary.warning_count = warnings.len();
        let result = if errors.is_empty() {
            "accepted".to_string()
        } else {
            "rejected".to_string()
        };
        tracing::info!(
            records = summary.record_count,
            errors = summary.error_count,
            warnings = summary.warning_count,
            exempted = summary.exempted_count,
            "lint pass finished"
        );

        LintReport {
            check_kind: LINT_CHECK_KIND.to_string(),
            result,
            errors,
            warnings,
            unused_exceptions: unused_exceptions.into_iter().collect(),
            summary,
        }
    }
}
