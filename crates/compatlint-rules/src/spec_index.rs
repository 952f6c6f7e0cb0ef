//! Canonical allow-list of specification URL prefixes.

use compatlint_data::SpecCatalog;
use std::collections::BTreeSet;
use std::ops::Bound;

/// Spec URLs accepted although the catalog does not list them.
///
/// Each entry names the condition under which it can be dropped.
pub const SPEC_URL_EXCEPTIONS: &[&str] = &[
    // Remove once the MathML Core draft is listed in browser-specs under this URL.
    "https://w3c.github.io/mathml/",
    // April Fools' RFC behind the 418 status code. Never going to be cataloged.
    "https://www.rfc-editor.org/rfc/rfc2324",
    // Remove once https://github.com/WebAssembly/exception-handling publishes a rendered spec.
    "https://github.com/WebAssembly/exception-handling/blob/main/proposals/exception-handling/Exceptions.md",
    // WebAssembly proposals are only published as markdown in their repositories.
    // Remove each once the proposal merges into the core specification.
    "https://github.com/WebAssembly/",
    // Remove once the controlslist attribute is upstreamed into HTML.
    "https://wicg.github.io/controls-list/",
    // Remove once `data:` URLs are covered by the Fetch standard entry in browser-specs.
    "https://datatracker.ietf.org/doc/html/rfc2397",
];

/// Immutable set of allowed URL prefixes.
///
/// Built once from the catalog plus exceptions and shared read-only by every
/// check afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecUrlIndex {
    prefixes: BTreeSet<String>,
}

impl SpecUrlIndex {
    /// Union every candidate URL of `catalog` with `exceptions`.
    pub fn build<'a>(
        catalog: &'a SpecCatalog,
        exceptions: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let prefixes: BTreeSet<String> = catalog
            .candidate_urls()
            .chain(exceptions)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();
        tracing::debug!(
            specs = catalog.specs().len(),
            prefixes = prefixes.len(),
            "built spec url index"
        );
        Self { prefixes }
    }

    /// Index over `catalog` and the built-in exception list.
    pub fn with_default_exceptions(catalog: &SpecCatalog) -> Self {
        Self::build(catalog, SPEC_URL_EXCEPTIONS.iter().copied())
    }

    pub fn from_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// True when `url` starts with any allowed prefix.
    pub fn allows(&self, url: &str) -> bool {
        // Every prefix of `url` sorts at or before it.
        self.prefixes
            .range::<str, _>((Bound::Unbounded, Bound::Included(url)))
            .rev()
            .any(|prefix| url.starts_with(prefix.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> SpecCatalog {
        SpecCatalog::from_value(json!([
            {
                "url": "https://www.w3.org/TR/css-grid-2/",
                "nightly": {
                    "url": "https://drafts.csswg.org/css-grid-2/",
                    "alternateUrls": ["https://w3c.github.io/csswg-drafts/css-grid-2/"]
                },
                "series": { "nightlyUrl": "https://drafts.csswg.org/css-grid/" }
            },
            {
                "url": "https://dom.spec.whatwg.org/",
                "nightly": { "url": "https://dom.spec.whatwg.org/" }
            }
        ]))
        .expect("catalog should decode")
    }

    #[test]
    fn build_flattens_all_sources_and_deduplicates() {
        let index = SpecUrlIndex::build(&catalog(), ["https://example.org/extra/"]);
        assert_eq!(index.len(), 6);
        assert!(index.allows("https://www.w3.org/TR/css-grid-2/#grid-container"));
        assert!(index.allows("https://drafts.csswg.org/css-grid-2/#x"));
        assert!(index.allows("https://w3c.github.io/csswg-drafts/css-grid-2/#x"));
        assert!(index.allows("https://drafts.csswg.org/css-grid/#subgrid"));
        assert!(index.allows("https://dom.spec.whatwg.org/#interface-event"));
        assert!(index.allows("https://example.org/extra/page"));
    }

    #[test]
    fn allows_is_prefix_not_substring_match() {
        let index = SpecUrlIndex::from_prefixes(["https://dom.spec.whatwg.org/"]);
        assert!(index.allows("https://dom.spec.whatwg.org/"));
        assert!(!index.allows("https://dom.spec.whatwg.org"));
        assert!(!index.allows("http://dom.spec.whatwg.org/"));
        assert!(!index.allows("https://mirror.example/https://dom.spec.whatwg.org/"));
    }

    #[test]
    fn allows_finds_shorter_prefix_behind_longer_siblings() {
        let index = SpecUrlIndex::from_prefixes([
            "https://a.example/",
            "https://a.example/spec-b/",
            "https://a.example/spec-z/",
        ]);
        assert!(index.allows("https://a.example/spec-c/#frag"));
        assert!(index.allows("https://a.example/spec-b/#frag"));
        assert!(!index.allows("https://b.example/"));
    }

    #[test]
    fn default_exceptions_are_included() {
        let index = SpecUrlIndex::with_default_exceptions(&SpecCatalog::default());
        assert_eq!(index.len(), SPEC_URL_EXCEPTIONS.len());
        assert!(index.allows("https://www.rfc-editor.org/rfc/rfc2324#section-2.3.2"));
        assert!(index.allows(
            "https://github.com/WebAssembly/tail-call/blob/main/proposals/tail-call/Overview.md"
        ));
    }

    #[test]
    fn empty_index_allows_nothing() {
        let index = SpecUrlIndex::default();
        assert!(index.is_empty());
        assert!(!index.allows("https://dom.spec.whatwg.org/"));
    }
}
