use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{is_builtin_scalar, FieldSignature, TypeDef};

/// Lint rule that flags field names repeating their owning or output type name
///
/// ```graphql
/// # Bad
/// type User { userName: String }
/// type Query { countryList: [Country!]! }
///
/// # Good
/// type User { name: String }
/// type Query { countries: [Country!]! }
/// ```
///
/// Comparison is case-insensitive. Root operation types are not checked as
/// owners. For the output type, a field named exactly after it or after its
/// plural (`users: [User!]!`) is fine. Names on the configured allow-list
/// (`dateOfBirth` by default) are exempt.
pub struct FieldRedundantNameRuleImpl;

impl LintRule for FieldRedundantNameRuleImpl {
    fn name(&self) -> &'static str {
        "field_redundant_name"
    }

    fn description(&self) -> &'static str {
        "Field names should not repeat their type name"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn is_heuristic(&self) -> bool {
        true
    }
}

impl FieldRule for FieldRedundantNameRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        if ctx.config.entity_name_allow_list.contains(field.name.as_ref()) {
            return Vec::new();
        }

        let field_lower = field.name.to_ascii_lowercase();

        if !ctx.table.is_root_type(&type_def.name)
            && field_lower.contains(&type_def.name.to_ascii_lowercase())
        {
            return vec![LintDiagnostic::warning(
                DiagnosticLocation::for_field(field),
                format!(
                    "Field '{}.{}' repeats its type name '{}'",
                    field.parent_type, field.name, type_def.name
                ),
                self.name(),
            )];
        }

        let output = field.type_ref.name.as_ref();
        if is_builtin_scalar(output) || !repeats_output_name(&field_lower, output) {
            return Vec::new();
        }

        vec![LintDiagnostic::warning(
            DiagnosticLocation::for_field(field),
            format!(
                "Field '{}.{}' repeats its output type name '{output}'",
                field.parent_type, field.name
            ),
            self.name(),
        )]
    }
}

/// Strict containment of the output name, ignoring a bare plural ending
fn repeats_output_name(field_lower: &str, output: &str) -> bool {
    let output_lower = output.to_ascii_lowercase();
    if field_lower == output_lower || !field_lower.contains(&output_lower) {
        return false;
    }

    let remainder = field_lower.replacen(&output_lower, "", 1);
    !matches!(remainder.as_str(), "s" | "es")
}
