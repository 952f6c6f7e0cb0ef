use chrono::{NaiveDate, Utc};
use compatlint_data::{BrowserRegistry, CompatTree, SpecCatalog};
use std::path::Path;

pub fn parse_today_or_exit(today: Option<&str>) -> NaiveDate {
    match today {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|e| {
            eprintln!("error: invalid --today {raw:?} (expected YYYY-MM-DD): {e}");
            std::process::exit(1);
        }),
        None => Utc::now().date_naive(),
    }
}

pub fn load_tree_or_exit(path: &Path) -> CompatTree {
    CompatTree::load(path).unwrap_or_else(|e| {
        eprintln!("error: failed to load compat data: {e}");
        std::process::exit(1);
    })
}

pub fn load_registry_or_exit(path: &Path) -> BrowserRegistry {
    BrowserRegistry::load(path).unwrap_or_else(|e| {
        eprintln!("error: failed to load browser data: {e}");
        std::process::exit(1);
    })
}

pub fn load_catalog_or_exit(path: &Path) -> SpecCatalog {
    SpecCatalog::load(path).unwrap_or_else(|e| {
        eprintln!("error: failed to load spec catalog: {e}");
        std::process::exit(1);
    })
}

pub fn print_json_or_exit(payload: &serde_json::Value, what: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|e| {
        eprintln!("error: failed to render {what} payload: {e}");
        std::process::exit(2);
    });
    println!("{rendered}");
}
