//! Spec-URL rule: every `spec_url` must point at a recognized specification.

use crate::logger::Logger;
use crate::rule::{FeatureTarget, Rule};
use crate::spec_index::SpecUrlIndex;

pub const SPEC_URLS_RULE: &str = "spec-urls";

/// Mirror host that serves CSS drafts unreliably.
pub const UNRELIABLE_CSS_MIRROR: &str = "https://drafts.csswg.org";
/// Stable host segment that replaces [`UNRELIABLE_CSS_MIRROR`].
pub const STABLE_CSS_HOST: &str = "https://w3c.github.io/csswg-drafts";

const CATALOG_HOME: &str = "https://github.com/w3c/browser-specs";

/// The stable GitHub form of a CSS draft mirror URL, if `url` uses the mirror.
pub fn stable_css_url(url: &str) -> Option<String> {
    url.strip_prefix(UNRELIABLE_CSS_MIRROR)
        .map(|rest| format!("{STABLE_CSS_HOST}{rest}"))
}

pub struct SpecUrlRule {
    index: SpecUrlIndex,
}

impl SpecUrlRule {
    pub fn new(index: SpecUrlIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &SpecUrlIndex {
        &self.index
    }

    fn check_url(&self, logger: &mut dyn Logger, url: &str) {
        let stable = stable_css_url(url);
        if let Some(stable) = &stable {
            logger.error(
                format!("spec_url uses the unreliable CSS drafts mirror: {url}"),
                Some(format!("Use {stable} instead (GitHub is more reliable)")),
            );
        }

        let allowed =
            self.index.allows(url) || stable.as_deref().is_some_and(|s| self.index.allows(s));
        if !allowed {
            logger.error(
                format!("Invalid specification URL found: {url}"),
                Some(format!(
                    "Check whether a more current specification URL exists, and that the specification is listed in {CATALOG_HOME} with a usable standardization status"
                )),
            );
        }
    }
}

impl Rule for SpecUrlRule {
    fn name(&self) -> &str {
        SPEC_URLS_RULE
    }

    fn description(&self) -> &str {
        "Ensure spec_url values point at recognized specifications"
    }

    fn check(&self, logger: &mut dyn Logger, target: FeatureTarget<'_>) {
        for url in target.record.spec_urls() {
            self.check_url(logger, url);
        }
    }
}
