use crate::support::{parse_today_or_exit, print_json_or_exit};
use compatlint_data::BrowserRegistry;
use compatlint_rules::{RuleSet, SpecUrlIndex};
use serde_json::json;

pub fn run(json_output: bool) {
    // Listing needs no data; empty snapshots only carry the rule surface.
    let rules = RuleSet::with_default_rules(
        SpecUrlIndex::default(),
        BrowserRegistry::default(),
        parse_today_or_exit(None),
    );
    let descriptors = rules.descriptors();

    if json_output {
        let payload = json!({
            "schema": 1,
            "rules": descriptors,
        });
        print_json_or_exit(&payload, "rules");
    } else {
        for descriptor in &descriptors {
            println!(
                "{} [{}] {}",
                descriptor.name, descriptor.scope, descriptor.description
            );
            for exception in &descriptor.exceptions {
                println!("  exempt: {exception}");
            }
        }
    }
}
