//! Integration tests: load the on-disk fixture dataset.
//!
//! tests/fixtures/ holds a miniature dataset laid out like the real one:
//! - dataset/: feature files split by category
//! - browsers/: one release file per runtime
//! - specs.json: the canonical specification catalog

use chrono::NaiveDate;
use compatlint_data::{BrowserRegistry, CompatTree, DataError, ReleaseDates, SpecCatalog};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn dataset_directory_loads_every_feature() {
    let tree = CompatTree::load(fixtures_dir().join("dataset")).expect("dataset should load");
    let identifiers: Vec<&str> = tree.records().map(|(id, _)| id).collect();
    assert_eq!(
        identifiers,
        vec![
            "api.AbortController",
            "api.AbortController.abort",
            "css.properties.box-flex",
        ]
    );

    let box_flex = tree
        .get("css.properties.box-flex")
        .expect("box-flex should be present");
    assert!(box_flex.is_abandoned());
    assert_eq!(box_flex.support.entries().count(), 2);

    let abort = tree
        .get("api.AbortController.abort")
        .expect("abort should be present");
    assert_eq!(abort.spec_urls().len(), 2);
}

#[test]
fn single_dataset_file_loads() {
    let tree = CompatTree::load(fixtures_dir().join("dataset/css/box-flex.json"))
        .expect("file should load");
    assert_eq!(tree.len(), 1);
}

#[test]
fn browsers_directory_merges_runtimes() {
    let registry =
        BrowserRegistry::load(fixtures_dir().join("browsers")).expect("browsers should load");
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.release_date("firefox", "57"),
        NaiveDate::from_ymd_opt(2017, 11, 14)
    );
    assert_eq!(
        registry.release_date("chrome", "≤15"),
        NaiveDate::from_ymd_opt(2011, 10, 25)
    );
    assert_eq!(registry.release_date("safari", "1"), None);
}

#[test]
fn spec_catalog_file_loads() {
    let catalog = SpecCatalog::load(fixtures_dir().join("specs.json")).expect("specs should load");
    assert_eq!(catalog.specs().len(), 2);
    assert_eq!(catalog.candidate_urls().count(), 7);
}

#[test]
fn missing_path_is_a_read_error() {
    let err = CompatTree::load(fixtures_dir().join("does-not-exist"))
        .expect_err("missing directory should fail");
    assert!(matches!(err, DataError::ReadFile { .. }));
}
