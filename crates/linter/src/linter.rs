use crate::config::StyleConfig;
use crate::context::{RuleContext, SchemaRoles};
use crate::diagnostics::{LintDiagnostic, LintSeverity};
use crate::heuristics::Heuristics;
use crate::registry;
use crate::report::Report;
use crate::traits::LintRule;
use graphql_style_hir::SymbolTable;
use std::sync::Arc;

/// A rule that survived severity resolution, paired with how to run it
struct ActiveRule<'a, R: ?Sized> {
    rule: &'a Arc<R>,
    severity: LintSeverity,
    options: Option<&'a serde_json::Value>,
}

/// Runs every enabled rule over a symbol table
///
/// The linter owns its configuration and heuristics; a run never mutates the
/// table it inspects.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    config: StyleConfig,
    heuristics: Heuristics,
}

impl Linter {
    #[must_use]
    pub fn new(config: StyleConfig) -> Self {
        Self {
            config,
            heuristics: Heuristics::default(),
        }
    }

    /// Replace the default plural and entity heuristics
    #[must_use]
    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Run all enabled rules and return their diagnostics unsorted
    ///
    /// Types are visited by name. Within a type, type rules run first, then
    /// each field's rules followed by its arguments' rules, each in catalog
    /// order.
    #[tracing::instrument(skip_all, fields(types = table.len()))]
    pub fn lint(&self, table: &SymbolTable) -> Vec<LintDiagnostic> {
        let roles = SchemaRoles::collect(table);

        let type_rules = self.activate(registry::type_rules());
        let field_rules = self.activate(registry::field_rules());
        let argument_rules = self.activate(registry::argument_rules());

        let context = |options| RuleContext {
            table,
            config: &self.config,
            heuristics: &self.heuristics,
            roles: &roles,
            options,
        };

        let mut diagnostics = Vec::new();
        for type_def in table.types() {
            tracing::trace!(type_name = %type_def.name, "Checking type");

            for active in &type_rules {
                let found = active.rule.check_type(&context(active.options), type_def);
                collect(&mut diagnostics, found, active.rule.name(), active.severity);
            }

            if !type_def.kind.has_fields() {
                continue;
            }

            for field in &type_def.fields {
                for active in &field_rules {
                    let found = active
                        .rule
                        .check_field(&context(active.options), type_def, field);
                    collect(&mut diagnostics, found, active.rule.name(), active.severity);
                }

                for argument in &field.arguments {
                    for active in &argument_rules {
                        let found =
                            active
                                .rule
                                .check_argument(&context(active.options), field, argument);
                        collect(&mut diagnostics, found, active.rule.name(), active.severity);
                    }
                }
            }
        }

        tracing::info!(diagnostics = diagnostics.len(), "Linting complete");
        diagnostics
    }

    /// Lint and aggregate into a sorted, deduplicated report
    #[must_use]
    pub fn report(&self, table: &SymbolTable) -> Report {
        Report::from_diagnostics(self.lint(table))
    }

    fn activate<'a, R>(&'a self, rules: &'a [Arc<R>]) -> Vec<ActiveRule<'a, R>>
    where
        R: LintRule + ?Sized,
    {
        rules
            .iter()
            .filter_map(|rule| {
                let Some(severity) = self.config.resolve_severity(rule.as_ref()) else {
                    tracing::trace!(rule = rule.name(), "Rule not enabled, skipping");
                    return None;
                };
                Some(ActiveRule {
                    rule,
                    severity,
                    options: self.config.rule_options(rule.name()),
                })
            })
            .collect()
    }
}

fn collect(
    diagnostics: &mut Vec<LintDiagnostic>,
    found: Vec<LintDiagnostic>,
    rule: &str,
    severity: LintSeverity,
) {
    if !found.is_empty() {
        tracing::debug!(rule, count = found.len(), "Rule reported diagnostics");
    }
    diagnostics.extend(found.into_iter().map(|mut diagnostic| {
        diagnostic.severity = severity;
        diagnostic
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleSeverity;
    use crate::heuristics::{EntityHeuristic, PluralHeuristic, Plurality};
    use graphql_style_hir::TypeDef;

    fn table(sdl: &str) -> SymbolTable {
        SymbolTable::from_source(sdl, "schema.graphql").unwrap()
    }

    #[test]
    fn test_empty_schema_has_no_diagnostics() {
        let diagnostics = Linter::default().lint(&SymbolTable::default());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_severity_override_applies() {
        let mut config = StyleConfig::default();
        config
            .severity_overrides
            .insert("type_casing".to_string(), RuleSeverity::Warn);

        let diagnostics = Linter::new(config).lint(&table("type user_profile { id: ID! }"));
        let casing: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.rule == "type_casing")
            .collect();
        assert_eq!(casing.len(), 1);
        assert_eq!(casing[0].severity, LintSeverity::Warning);
    }

    #[test]
    fn test_disabled_rule_does_not_run() {
        let mut config = StyleConfig::default();
        config.disabled_rules.insert("type_casing".to_string());

        let diagnostics = Linter::new(config).lint(&table("type user_profile { id: ID! }"));
        assert!(diagnostics.iter().all(|d| d.rule != "type_casing"));
    }

    #[test]
    fn test_enum_and_scalar_fields_not_walked() {
        let diagnostics = Linter::default().lint(&table("scalar Date_Time\nenum Color { RED }"));
        assert!(diagnostics.iter().all(|d| d.location.field_name.is_none()
            || d.rule == "enum_value_casing"));
    }

    struct NeverPlural;

    impl PluralHeuristic for NeverPlural {
        fn classify(&self, _word: &str) -> Plurality {
            Plurality::Unknown
        }
    }

    struct NothingIsAnEntity;

    impl EntityHeuristic for NothingIsAnEntity {
        fn is_entity(&self, _table: &SymbolTable, _type_def: &TypeDef) -> bool {
            false
        }
    }

    #[test]
    fn test_custom_heuristics_are_used() {
        let sdl = "type Users { name: String tags: [String!]! }";
        let default_rules: Vec<_> = Linter::default()
            .lint(&table(sdl))
            .into_iter()
            .map(|d| d.rule)
            .collect();
        assert!(default_rules.contains(&"type_singular".to_string()));
        assert!(default_rules.contains(&"id_field_presence".to_string()));

        let linter = Linter::default().with_heuristics(Heuristics {
            plural: Arc::new(NeverPlural),
            entity: Arc::new(NothingIsAnEntity),
        });
        let diagnostics = linter.lint(&table(sdl));
        assert!(diagnostics.iter().all(|d| d.rule != "type_singular"
            && d.rule != "id_field_presence"));
    }

    #[test]
    fn test_report_is_sorted() {
        let report = Linter::default().report(&table(
            "type b_type { id: ID! }\ntype a_type { id: ID! }",
        ));
        let types: Vec<_> = report
            .diagnostics()
            .iter()
            .map(|d| d.location.type_name.to_string())
            .collect();
        let mut sorted = types.clone();
        sorted.sort();
        assert_eq!(types, sorted);
        assert!(!report.is_pass());
    }
}
