use crate::exit_code::ExitCode;
use crate::RulesFormat;
use colored::Colorize;
use graphql_style_linter::{all_rules, LintRule};

pub fn run(format: RulesFormat) -> ExitCode {
    match format {
        RulesFormat::Human => {
            for rule in all_rules() {
                println!("{}", human_line(rule.as_ref()));
            }
        }
        RulesFormat::Json => {
            let rules: Vec<_> = all_rules().iter().map(|rule| rule_json(rule.as_ref())).collect();
            println!("{}", serde_json::Value::Array(rules));
        }
    }
    ExitCode::Success
}

fn default_label(rule: &dyn LintRule) -> String {
    if rule.enabled_by_default() {
        rule.default_severity().to_string()
    } else {
        "off".to_string()
    }
}

fn human_line(rule: &dyn LintRule) -> String {
    let mut tags = vec![default_label(rule)];
    if rule.is_heuristic() {
        tags.push("heuristic".to_string());
    }
    format!(
        "{:<24} {:<20} {}",
        rule.name().bold(),
        tags.join(", ").dimmed(),
        rule.description()
    )
}

fn rule_json(rule: &dyn LintRule) -> serde_json::Value {
    serde_json::json!({
        "id": rule.name(),
        "description": rule.description(),
        "defaultSeverity": rule.default_severity(),
        "enabledByDefault": rule.enabled_by_default(),
        "heuristic": rule.is_heuristic(),
    })
}
