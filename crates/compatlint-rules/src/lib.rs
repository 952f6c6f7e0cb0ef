//! # compatlint-rules
//!
//! Lint rules over compatibility records and the driver that runs them.
//!
//! ## Architecture
//!
//! ```text
//! SpecCatalog + SPEC_URL_EXCEPTIONS ──► SpecUrlIndex ──► SpecUrlRule ─┐
//! BrowserRegistry + today ──► AgeThresholds ──────────► ObsoleteRule ─┤
//!                                                                     ▼
//! (identifier, FeatureRecord) ──► RuleSet::check ──► Logger ──► LintReport
//! ```
//!
//! Rules are pure: they read a record plus the read-only snapshots they were
//! built with and report only through a [`Logger`]. Exemptions are applied by
//! the driver, never by the rules.

pub mod finding;
pub mod logger;
pub mod obsolete;
pub mod rule;
pub mod runner;
pub mod spec_index;
pub mod spec_urls;

pub use finding::{Finding, Severity};
pub use logger::{FindingBuffer, Logger, Tee, TracingLogger};
pub use obsolete::{
    AgeThresholds, ERROR_AGE, IGNORED_RUNTIME, OBSOLETE_EXCEPTIONS, OBSOLETE_RULE, ObsoleteRule,
    WARNING_AGE, implemented_and_removed, never_implemented,
};
pub use rule::{FeatureTarget, Rule, RuleDescriptor, RuleScope};
pub use runner::{LINT_CHECK_KIND, LintReport, LintSummary, RecordFinding, RuleSet};
pub use spec_index::{SPEC_URL_EXCEPTIONS, SpecUrlIndex};
pub use spec_urls::{
    SPEC_URLS_RULE, STABLE_CSS_HOST, SpecUrlRule, UNRELIABLE_CSS_MIRROR, stable_css_url,
};
