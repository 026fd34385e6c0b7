use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::naming::{is_camel_case, to_camel_case};
use crate::traits::{ArgumentRule, FieldRule, LintRule};
use graphql_style_hir::{ArgumentDef, FieldSignature, TypeDef};

/// Lint rule that enforces `camelCase` field and argument names
///
/// ```graphql
/// # Bad
/// type User { first_name: String }
///
/// # Good
/// type User { firstName: String }
/// ```
pub struct FieldCasingRuleImpl;

impl LintRule for FieldCasingRuleImpl {
    fn name(&self) -> &'static str {
        "field_casing"
    }

    fn description(&self) -> &'static str {
        "Field and argument names must be camelCase"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl FieldRule for FieldCasingRuleImpl {
    fn check_field(
        &self,
        _ctx: &RuleContext<'_>,
        _type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        if is_camel_case(&field.name) {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_field(field),
            format!(
                "Field '{}.{}' should be camelCase",
                field.parent_type, field.name
            ),
            self.name(),
        )
        .with_fix(to_camel_case(&field.name))]
    }
}

impl ArgumentRule for FieldCasingRuleImpl {
    fn check_argument(
        &self,
        _ctx: &RuleContext<'_>,
        field: &FieldSignature,
        argument: &ArgumentDef,
    ) -> Vec<LintDiagnostic> {
        if is_camel_case(&argument.name) {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_argument(field, argument),
            format!(
                "Argument '{}' on field '{}.{}' should be camelCase",
                argument.name, field.parent_type, field.name
            ),
            self.name(),
        )
        .with_fix(to_camel_case(&argument.name))]
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_helpers::{lint_rule, messages};

    #[test]
    fn test_camel_case_passes() {
        let diagnostics = lint_rule(
            "type Query { userById(userId: ID!): Int }",
            "field_casing",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_fields_and_arguments() {
        let diagnostics = lint_rule(
            r"
            type Query { UserById(user_id: ID!): Int }
            input UserInput { first_name: String }
            ",
            "field_casing",
        );
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Field 'Query.UserById' should be camelCase",
                "Argument 'user_id' on field 'Query.UserById' should be camelCase",
                "Field 'UserInput.first_name' should be camelCase",
            ]
        );
        assert_eq!(diagnostics[1].suggested_fix.as_deref(), Some("userId"));
        assert_eq!(
            diagnostics[1].location.argument_name.as_deref(),
            Some("user_id")
        );
    }
}
