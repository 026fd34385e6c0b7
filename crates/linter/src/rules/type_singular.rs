use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::heuristics::Plurality;
use crate::naming::last_word;
use crate::traits::{LintRule, TypeRule};
use graphql_style_hir::{TypeDef, TypeDefKind};

/// Lint rule that flags type names whose last word reads as plural
///
/// Enums are exempt. Relies on the plural heuristic, so it only warns.
pub struct TypeSingularRuleImpl;

impl LintRule for TypeSingularRuleImpl {
    fn name(&self) -> &'static str {
        "type_singular"
    }

    fn description(&self) -> &'static str {
        "Type names should be singular"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn is_heuristic(&self) -> bool {
        true
    }
}

impl TypeRule for TypeSingularRuleImpl {
    fn check_type(&self, ctx: &RuleContext<'_>, type_def: &TypeDef) -> Vec<LintDiagnostic> {
        if type_def.kind == TypeDefKind::Enum {
            return Vec::new();
        }

        let Some(word) = last_word(&type_def.name) else {
            return Vec::new();
        };
        if ctx.heuristics.plural.classify(word) != Plurality::Plural {
            return Vec::new();
        }

        vec![LintDiagnostic::warning(
            DiagnosticLocation::for_type(type_def),
            format!("Type '{}' should have a singular name", type_def.name),
            self.name(),
        )]
    }
}
