use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::naming::{is_screaming_snake_case, to_screaming_snake_case};
use crate::traits::{LintRule, TypeRule};
use graphql_style_hir::{TypeDef, TypeDefKind};

/// Lint rule that enforces `SCREAMING_SNAKE_CASE` for enum values
///
/// ```graphql
/// # Bad
/// enum Status { active inProgress }
///
/// # Good
/// enum Status { ACTIVE IN_PROGRESS }
/// ```
pub struct EnumValueCasingRuleImpl;

impl LintRule for EnumValueCasingRuleImpl {
    fn name(&self) -> &'static str {
        "enum_value_casing"
    }

    fn description(&self) -> &'static str {
        "Enum values must be SCREAMING_SNAKE_CASE"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl TypeRule for EnumValueCasingRuleImpl {
    fn check_type(&self, _ctx: &RuleContext<'_>, type_def: &TypeDef) -> Vec<LintDiagnostic> {
        if type_def.kind != TypeDefKind::Enum {
            return Vec::new();
        }

        type_def
            .enum_values
            .iter()
            .filter(|value| !is_screaming_snake_case(&value.name))
            .map(|value| {
                LintDiagnostic::error(
                    DiagnosticLocation::for_enum_value(type_def, value),
                    format!(
                        "Enum value '{}.{}' should be SCREAMING_SNAKE_CASE",
                        type_def.name, value.name
                    ),
                    self.name(),
                )
                .with_fix(to_screaming_snake_case(&value.name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_helpers::{lint_rule, messages};

    #[test]
    fn test_screaming_snake_values_pass() {
        let diagnostics = lint_rule("enum Status { ACTIVE IN_PROGRESS }", "enum_value_casing");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_each_bad_value_reported() {
        let diagnostics = lint_rule(
            "enum Status { active ARCHIVED inProgress }",
            "enum_value_casing",
        );
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Enum value 'Status.active' should be SCREAMING_SNAKE_CASE",
                "Enum value 'Status.inProgress' should be SCREAMING_SNAKE_CASE",
            ]
        );
        assert_eq!(diagnostics[1].suggested_fix.as_deref(), Some("IN_PROGRESS"));
        assert_eq!(diagnostics[1].location.field_name.as_deref(), Some("inProgress"));
    }
}
