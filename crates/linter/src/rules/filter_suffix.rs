use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::traits::{LintRule, TypeRule};
use graphql_style_hir::{TypeDef, TypeDefKind};

/// Lint rule that requires inputs passed as a `filter` argument to end with "Filter"
///
/// ```graphql
/// # Bad
/// type Query { countries(filter: CountryInput): [Country!]! }
///
/// # Good
/// type Query { countries(filter: CountryFilter): [Country!]! }
/// ```
pub struct FilterSuffixRuleImpl;

impl LintRule for FilterSuffixRuleImpl {
    fn name(&self) -> &'static str {
        "filter_suffix"
    }

    fn description(&self) -> &'static str {
        "Input types used as a filter argument must end with Filter"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl TypeRule for FilterSuffixRuleImpl {
    fn check_type(&self, ctx: &RuleContext<'_>, type_def: &TypeDef) -> Vec<LintDiagnostic> {
        if type_def.kind != TypeDefKind::InputObject
            || !ctx.roles.is_filter_input(&type_def.name)
            || type_def.name.ends_with("Filter")
        {
            return Vec::new();
        }

        let stem = type_def
            .name
            .strip_suffix("Input")
            .filter(|stem| !stem.is_empty())
            .unwrap_or(type_def.name.as_ref());

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_type(type_def),
            format!(
                "Input type '{}' is used as a filter and should end with 'Filter'",
                type_def.name
            ),
            self.name(),
        )
        .with_fix(format!("{stem}Filter"))]
    }
}
