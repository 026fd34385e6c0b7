use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::traits::{LintRule, TypeRule};
use graphql_style_hir::TypeDef;

/// Lint rule that expects entity types to expose an `id: ID!` field
///
/// Which object types count as entities is decided by the configured
/// `EntityHeuristic`, so this rule only ever warns.
pub struct IdFieldPresenceRuleImpl;

impl LintRule for IdFieldPresenceRuleImpl {
    fn name(&self) -> &'static str {
        "id_field_presence"
    }

    fn description(&self) -> &'static str {
        "Entity types should have an 'id: ID!' field"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn is_heuristic(&self) -> bool {
        true
    }
}

impl TypeRule for IdFieldPresenceRuleImpl {
    fn check_type(&self, ctx: &RuleContext<'_>, type_def: &TypeDef) -> Vec<LintDiagnostic> {
        if !ctx.heuristics.entity.is_entity(ctx.table, type_def) {
            return Vec::new();
        }

        let has_id = type_def
            .fields
            .iter()
            .any(|field| field.name.as_ref() == "id" && field.type_ref.is_non_null_named("ID"));
        if has_id {
            return Vec::new();
        }

        vec![LintDiagnostic::warning(
            DiagnosticLocation::for_type(type_def),
            format!(
                "Type '{}' looks like an entity and should have an 'id: ID!' field",
                type_def.name
            ),
            self.name(),
        )]
    }
}
