//! Logging sinks that receive findings from rules.
//!
//! Rules only ever talk to a `Logger`. The transport behind it (an in-memory
//! buffer for the driver and tests, `tracing` events for streaming output) is
//! chosen by the caller.

use crate::finding::{Finding, Severity};

/// Sink for findings.
pub trait Logger {
    fn emit(&mut self, finding: Finding);

    fn error(&mut self, message: String, tip: Option<String>) {
        self.emit(Finding::new(Severity::Error, message, tip));
    }

    fn warning(&mut self, message: String, tip: Option<String>) {
        self.emit(Finding::new(Severity::Warning, message, tip));
    }
}

/// Collects findings in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingBuffer {
    findings: Vec<Finding>,
}

impl FindingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}

impl Logger for FindingBuffer {
    fn emit(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

/// Streams each finding as a `tracing` event tagged with rule and record.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger<'a> {
    pub rule: &'a str,
    pub identifier: &'a str,
}

impl<'a> TracingLogger<'a> {
    pub fn new(rule: &'a str, identifier: &'a str) -> Self {
        Self { rule, identifier }
    }
}

impl Logger for TracingLogger<'_> {
    fn emit(&mut self, finding: Finding) {
        let tip = finding.tip.as_deref().unwrap_or_default();
        match finding.severity {
            Severity::Error => tracing::error!(
                rule = self.rule,
                identifier = self.identifier,
                tip,
                "{}",
                finding.message
            ),
            Severity::Warning => tracing::warn!(
                rule = self.rule,
                identifier = self.identifier,
                tip,
                "{}",
                finding.message
            ),
        }
    }
}

/// Forwards every finding to two sinks.
pub struct Tee<'a, A: Logger + ?Sized, B: Logger + ?Sized> {
    pub first: &'a mut A,
    pub second: &'a mut B,
}

impl<A: Logger + ?Sized, B: Logger + ?Sized> Logger for Tee<'_, A, B> {
    fn emit(&mut self, finding: Finding) {
        self.first.emit(finding.clone());
        self.second.emit(finding);
    }
}
