use crate::config::{LintConfig, resolve_inputs};
use crate::support::{
    load_catalog_or_exit, load_registry_or_exit, load_tree_or_exit, parse_today_or_exit,
    print_json_or_exit,
};
use compatlint_rules::{LintReport, RuleSet, SpecUrlIndex};
use serde_json::json;
use std::path::Path;

pub struct Args {
    pub data: Option<String>,
    pub browsers: Option<String>,
    pub specs: Option<String>,
    pub config: String,
    pub filter: Option<String>,
    pub today: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

fn print_report(report: &LintReport) {
    println!(
        "[compatlint] {} (records={}, errors={}, warnings={}, exempted={})",
        if report.accepted() { "OK" } else { "FAIL" },
        report.summary.record_count,
        report.summary.error_count,
        report.summary.warning_count,
        report.summary.exempted_count
    );
    for finding in &report.errors {
        println!(
            "  - {} {}: {}",
            finding.identifier, finding.rule, finding.message
        );
        if let Some(tip) = &finding.tip {
            println!("      tip: {tip}");
        }
    }
    for finding in &report.warnings {
        println!(
            "  - WARN {} {}: {}",
            finding.identifier, finding.rule, finding.message
        );
        if let Some(tip) = &finding.tip {
            println!("      tip: {tip}");
        }
    }
    for exception in &report.unused_exceptions {
        println!("  - NOTE unused exception {exception}");
    }
}

pub fn run(args: Args) {
    let config = LintConfig::load(Path::new(&args.config)).unwrap_or_else(|e| {
        eprintln!("error: invalid config: {e}");
        std::process::exit(1);
    });
    let inputs = resolve_inputs(config, args.data, args.browsers, args.specs);
    let today = parse_today_or_exit(args.today.as_deref());

    let mut tree = load_tree_or_exit(&inputs.data);
    if let Some(prefix) = &args.filter {
        tree.retain_prefix(prefix);
    }
    let registry = load_registry_or_exit(&inputs.browsers);
    let catalog = load_catalog_or_exit(&inputs.specs);
    let index = SpecUrlIndex::with_default_exceptions(&catalog);
    tracing::info!(
        records = tree.len(),
        browsers = registry.len(),
        prefixes = index.len(),
        %today,
        "inputs loaded"
    );

    let rules = RuleSet::with_default_rules(index, registry, today).streaming(args.verbose);
    let report = rules.check(tree.records());

    if args.json {
        let payload = json!({
            "schema": 1,
            "checkKind": report.check_kind,
            "dataPath": inputs.data.display().to_string(),
            "today": today.to_string(),
            "filter": args.filter,
            "result": report.result,
            "errors": report.errors,
            "warnings": report.warnings,
            "unusedExceptions": report.unused_exceptions,
            "summary": report.summary,
        });
        print_json_or_exit(&payload, "check");
    } else {
        print_report(&report);
    }

    if !report.accepted() {
        std::process::exit(1);
    }
}
