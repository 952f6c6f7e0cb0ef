//! Obsolescence rule.
//!
//! A record is obsolete when either
//! - its specification is abandoned (`standard_track: false`) and no runtime
//!   ever shipped it, or
//! - every runtime that shipped it has since removed it, and the removals are
//!   old enough that keeping the record is dead weight.
//!
//! Both checks favor false negatives: anything that cannot be dated clears the
//! record.

use crate::finding::Severity;
use crate::logger::Logger;
use crate::rule::{FeatureTarget, Rule};
use chrono::{Months, NaiveDate};
use compatlint_data::{ReleaseDates, SupportBlock, SupportEntry};

pub const OBSOLETE_RULE: &str = "obsolete";

/// Runtime whose removals never count towards obsolescence.
pub const IGNORED_RUNTIME: &str = "ie";

/// Removals at least this old produce a warning.
pub const WARNING_AGE: Months = Months::new(24);
/// Removals at least this old produce an error.
pub const ERROR_AGE: Months = Months::new(30);

/// Records that stay in the dataset despite being obsolete.
pub const OBSOLETE_EXCEPTIONS: &[&str] = &[
    "html.elements.blink",
    "html.elements.keygen",
    "javascript.builtins.Object.observe",
];

/// Cut-off dates derived from one reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeThresholds {
    /// Removals released after this date are too recent to flag.
    pub warning_before: NaiveDate,
    /// Removals released after this date (and not after `warning_before`)
    /// are flagged as warnings only.
    pub error_before: NaiveDate,
}

impl AgeThresholds {
    /// Calendar offsets from `today`; month-end days clamp (Aug 31 → Feb 28).
    pub fn from_today(today: NaiveDate) -> Self {
        Self {
            warning_before: today.checked_sub_months(WARNING_AGE).unwrap_or(NaiveDate::MIN),
            error_before: today.checked_sub_months(ERROR_AGE).unwrap_or(NaiveDate::MIN),
        }
    }
}

/// True when no entry of any runtime records a truthy `version_added`.
pub fn never_implemented(support: &SupportBlock) -> bool {
    !support.entries().any(SupportEntry::is_added)
}

/// Severity for a feature removed from every runtime long enough ago.
///
/// `None` as soon as any non-`ie` entry has no dated removal, or its removal
/// is newer than `thresholds.warning_before`. A single clearing entry anywhere
/// clears the whole record.
pub fn implemented_and_removed(
    support: &SupportBlock,
    releases: &dyn ReleaseDates,
    thresholds: &AgeThresholds,
) -> Option<Severity> {
    let mut severity = Severity::Error;
    for (runtime, entries) in support.runtimes() {
        if runtime == IGNORED_RUNTIME {
            continue;
        }
        for entry in entries {
            let version = entry.removed_version()?;
            let released = releases.release_date(runtime, version)?;
            if released > thresholds.warning_before {
                return None;
            }
            if released > thresholds.error_before {
                severity = Severity::Warning;
            }
        }
    }
    Some(severity)
}

pub struct ObsoleteRule<R> {
    releases: R,
    thresholds: AgeThresholds,
    exceptions: Vec<String>,
}

impl<R: ReleaseDates> ObsoleteRule<R> {
    pub fn new(releases: R, thresholds: AgeThresholds, exceptions: Vec<String>) -> Self {
        Self {
            releases,
            thresholds,
            exceptions,
        }
    }

    /// Rule with the built-in exception list.
    pub fn with_default_exceptions(releases: R, today: NaiveDate) -> Self {
        Self::new(
            releases,
            AgeThresholds::from_today(today),
            OBSOLETE_EXCEPTIONS.iter().map(|id| id.to_string()).collect(),
        )
    }

    pub fn thresholds(&self) -> &AgeThresholds {
        &self.thresholds
    }
}

impl<R: ReleaseDates + Send + Sync> Rule for ObsoleteRule<R> {
    fn name(&self) -> &str {
        OBSOLETE_RULE
    }

    fn description(&self) -> &str {
        "Flag features that were never implemented or were removed everywhere long ago"
    }

    fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    fn check(&self, logger: &mut dyn Logger, target: FeatureTarget<'_>) {
        let record = target.record;
        if record.is_abandoned() && never_implemented(&record.support) {
            logger.error(
                "feature was never implemented in any browser and the specification has been abandoned"
                    .to_string(),
                Some("Remove the feature from the dataset".to_string()),
            );
            return;
        }

        let Some(severity) =
            implemented_and_removed(&record.support, &self.releases, &self.thresholds)
        else {
            return;
        };
        let message = "feature was implemented and has since been removed from all browsers dating back two or more years ago".to_string();
        let tip = Some("Remove the feature from the dataset".to_string());
        match severity {
            Severity::Error => logger.error(message, tip),
            Severity::Warning => logger.warning(message, tip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::FindingBuffer;
    use compatlint_data::{BrowserRegistry, FeatureRecord};
    use serde_json::{Value, json};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn today() -> NaiveDate {
        date(2026, 6, 15)
    }

    fn thresholds() -> AgeThresholds {
        AgeThresholds::from_today(today())
    }

    fn support(value: Value) -> SupportBlock {
        serde_json::from_value(value).expect("support should decode")
    }

    /// Registry with chrome 50 released on `chrome_50` and firefox 60 on
    /// 2020-01-01; `ie` 11 on 2013-10-17.
    fn registry(chrome_50: &str) -> BrowserRegistry {
        BrowserRegistry::from_value(json!({
            "browsers": {
                "chrome": { "releases": { "50": { "release_date": chrome_50 } } },
                "firefox": { "releases": {
                    "60": { "release_date": "2020-01-01" },
                    "140": { "release_date": "2026-01-01" }
                } },
                "ie": { "releases": { "11": { "release_date": "2013-10-17" } } }
            }
        }))
        .expect("registry should decode")
    }

    fn check(record: Value, releases: BrowserRegistry) -> FindingBuffer {
        let record: FeatureRecord = serde_json::from_value(record).expect("record should decode");
        let rule = ObsoleteRule::new(releases, thresholds(), Vec::new());
        let mut buffer = FindingBuffer::new();
        rule.check(&mut buffer, FeatureTarget::new("api.Test", &record));
        buffer
    }

    #[test]
    fn thresholds_are_calendar_offsets() {
        let t = thresholds();
        assert_eq!(t.warning_before, date(2024, 6, 15));
        assert_eq!(t.error_before, date(2023, 12, 15));

        let leap = AgeThresholds::from_today(date(2028, 2, 29));
        assert_eq!(leap.warning_before, date(2026, 2, 28));
        assert_eq!(leap.error_before, date(2025, 8, 29));
    }

    #[test]
    fn never_implemented_when_every_entry_is_falsy() {
        let block = support(json!({
            "chrome": { "version_added": false },
            "firefox": [{ "version_added": null }, { "version_added": "" }],
            "safari": false,
            "opera": {}
        }));
        assert!(never_implemented(&block));
        assert!(never_implemented(&SupportBlock::default()));
    }

    #[test]
    fn any_truthy_entry_means_implemented() {
        for truthy in [
            json!({ "version_added": "1" }),
            json!({ "version_added": true }),
            json!(true),
        ] {
            let block = support(json!({
                "chrome": { "version_added": false },
                "firefox": [{ "version_added": false }, truthy]
            }));
            assert!(!never_implemented(&block));
        }
    }

    #[test]
    fn removal_age_sets_severity() {
        let block =
            support(json!({ "chrome": { "version_added": "10", "version_removed": "50" } }));
        let cases = [
            ("2023-06-15", Some(Severity::Error)),
            ("2024-04-01", Some(Severity::Warning)),
            ("2025-06-15", None),
            ("2024-06-15", Some(Severity::Warning)),
            ("2024-06-16", None),
            ("2023-12-15", Some(Severity::Error)),
            ("2023-12-16", Some(Severity::Warning)),
        ];
        for (released, expected) in cases {
            assert_eq!(
                implemented_and_removed(&block, &registry(released), &thresholds()),
                expected,
                "release date {released}"
            );
        }
    }

    #[test]
    fn undated_or_boolean_removal_clears_record() {
        let releases = registry("2016-04-13");
        for other in [
            json!({ "version_added": "1" }),
            json!({ "version_added": "1", "version_removed": true }),
            json!({ "version_added": "1", "version_removed": false }),
            json!(true),
            json!(false),
            json!({ "version_added": "1", "version_removed": "61" }),
        ] {
            let block = support(json!({
                "chrome": { "version_added": "10", "version_removed": "50" },
                "firefox": other
            }));
            assert_eq!(
                implemented_and_removed(&block, &releases, &thresholds()),
                None
            );
        }
    }

    #[test]
    fn one_recent_removal_clears_otherwise_old_record() {
        let block = support(json!({
            "chrome": { "version_added": "10", "version_removed": "50" },
            "firefox": { "version_added": "2", "version_removed": "140" }
        }));
        assert_eq!(
            implemented_and_removed(&block, &registry("2016-04-13"), &thresholds()),
            None
        );
    }

    #[test]
    fn warning_from_any_runtime_downgrades_record() {
        let block = support(json!({
            "chrome": { "version_added": "10", "version_removed": "50" },
            "firefox": [
                { "version_added": "2", "version_removed": "60" },
                { "version_added": "1", "version_removed": "60", "prefix": "-moz-" }
            ]
        }));
        assert_eq!(
            implemented_and_removed(&block, &registry("2024-03-01"), &thresholds()),
            Some(Severity::Warning)
        );
        assert_eq!(
            implemented_and_removed(&block, &registry("2016-04-13"), &thresholds()),
            Some(Severity::Error)
        );
    }

    #[test]
    fn ie_entries_never_affect_outcome() {
        let releases = registry("2016-04-13");
        let without_ie = support(json!({
            "chrome": { "version_added": "10", "version_removed": "50" }
        }));
        for ie in [
            json!({ "version_added": "6" }),
            json!({ "version_added": "6", "version_removed": "11" }),
            json!({ "version_added": "6", "version_removed": "99" }),
            json!(true),
        ] {
            let with_ie = support(json!({
                "chrome": { "version_added": "10", "version_removed": "50" },
                "ie": ie
            }));
            assert_eq!(
                implemented_and_removed(&with_ie, &releases, &thresholds()),
                implemented_and_removed(&without_ie, &releases, &thresholds())
            );
        }
    }

    #[test]
    fn unknown_runtime_clears_record() {
        let block = support(json!({
            "chrome": { "version_added": "10", "version_removed": "50" },
            "servo": { "version_added": "1", "version_removed": "2" }
        }));
        assert_eq!(
            implemented_and_removed(&block, &registry("2016-04-13"), &thresholds()),
            None
        );
    }

    #[test]
    fn abandoned_and_never_implemented_is_single_error() {
        let buffer = check(
            json!({
                "status": { "standard_track": false },
                "support": {
                    "chrome": { "version_added": false },
                    "firefox": { "version_added": false }
                }
            }),
            registry("2016-04-13"),
        );
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.findings()[0].severity, Severity::Error);
        assert!(buffer.findings()[0].message.contains("never implemented"));
    }

    #[test]
    fn never_implemented_on_standard_track_is_not_flagged() {
        let buffer = check(
            json!({
                "status": { "standard_track": true },
                "support": { "chrome": { "version_added": false } }
            }),
            registry("2016-04-13"),
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn abandoned_precedence_skips_removal_check() {
        // Support is empty, so the removal check alone would also fire.
        let buffer = check(
            json!({ "status": { "standard_track": false }, "support": {} }),
            registry("2016-04-13"),
        );
        assert_eq!(buffer.len(), 1);
        assert!(buffer.findings()[0].message.contains("never implemented"));
    }

    #[test]
    fn removed_scenarios_by_age() {
        let record = json!({
            "support": { "chrome": { "version_added": "10", "version_removed": "50" } }
        });
        // Three years, 2.2 years and one year before 2026-06-15.
        let cases = [
            ("2023-06-15", Some(Severity::Error)),
            ("2024-03-27", Some(Severity::Warning)),
            ("2025-06-15", None),
        ];
        for (released, expected) in cases {
            let buffer = check(record.clone(), registry(released));
            assert_eq!(
                buffer.findings().first().map(|finding| finding.severity),
                expected,
                "release date {released}"
            );
            assert!(buffer.len() <= 1);
            if let Some(finding) = buffer.findings().first() {
                assert!(finding.message.contains("has since been removed"));
            }
        }
    }

    #[test]
    fn default_exceptions_are_registered() {
        let rule = ObsoleteRule::with_default_exceptions(registry("2016-04-13"), today());
        assert!(rule.is_exempt("html.elements.blink"));
        assert_eq!(rule.exceptions().len(), OBSOLETE_EXCEPTIONS.len());
        assert_eq!(rule.thresholds(), &thresholds());
    }
}
