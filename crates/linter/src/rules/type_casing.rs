use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::naming::{is_pascal_case, to_pascal_case};
use crate::traits::{LintRule, TypeRule};
use graphql_style_hir::TypeDef;

/// Lint rule that enforces `PascalCase` type names
///
/// ```graphql
/// # Bad
/// type user_profile { id: ID! }
///
/// # Good
/// type UserProfile { id: ID! }
/// ```
pub struct TypeCasingRuleImpl;

impl LintRule for TypeCasingRuleImpl {
    fn name(&self) -> &'static str {
        "type_casing"
    }

    fn description(&self) -> &'static str {
        "Type names must be PascalCase"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl TypeRule for TypeCasingRuleImpl {
    fn check_type(&self, _ctx: &RuleContext<'_>, type_def: &TypeDef) -> Vec<LintDiagnostic> {
        if is_pascal_case(&type_def.name) {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_type(type_def),
            format!("Type '{}' should be PascalCase", type_def.name),
            self.name(),
        )
        .with_fix(to_pascal_case(&type_def.name))]
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_helpers::{lint_rule, messages};

    #[test]
    fn test_pascal_case_passes() {
        let diagnostics = lint_rule("type UserProfile { id: ID! }\nenum Role { ADMIN }", "type_casing");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_snake_case_type() {
        let diagnostics = lint_rule("type user_profile { id: ID! }", "type_casing");
        assert_eq!(
            messages(&diagnostics),
            vec!["Type 'user_profile' should be PascalCase"]
        );
        assert_eq!(diagnostics[0].suggested_fix.as_deref(), Some("UserProfile"));
    }

    #[test]
    fn test_every_kind_is_checked() {
        let diagnostics = lint_rule(
            r"
            scalar dateTime
            input userInput { name: String }
            enum role { ADMIN }
            ",
            "type_casing",
        );
        assert_eq!(diagnostics.len(), 3);
    }
}
