use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::traits::{LintRule, TypeRule};
use graphql_style_hir::TypeDef;

/// Suffixes that only restate what kind of type a name belongs to
const KIND_SUFFIXES: &[&str] = &["Enum", "Type", "Scalar"];

/// Lint rule that rejects type names ending in a kind-revealing suffix
///
/// ```graphql
/// # Bad
/// enum RoleEnum { ADMIN }
///
/// # Good
/// enum Role { ADMIN }
/// ```
pub struct TypeKindSuffixRuleImpl;

impl LintRule for TypeKindSuffixRuleImpl {
    fn name(&self) -> &'static str {
        "type_kind_suffix"
    }

    fn description(&self) -> &'static str {
        "Type names must not end with Enum, Type or Scalar"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl TypeRule for TypeKindSuffixRuleImpl {
    fn check_type(&self, _ctx: &RuleContext<'_>, type_def: &TypeDef) -> Vec<LintDiagnostic> {
        let name = type_def.name.as_ref();
        let Some((suffix, stem)) = KIND_SUFFIXES
            .iter()
            .find_map(|suffix| name.strip_suffix(suffix).map(|stem| (*suffix, stem)))
        else {
            return Vec::new();
        };
        if stem.is_empty() {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_type(type_def),
            format!("Type '{name}' should not end with the kind suffix '{suffix}'"),
            self.name(),
        )
        .with_fix(stem)]
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_helpers::{lint_rule, messages};

    #[test]
    fn test_kind_suffixes() {
        let diagnostics = lint_rule(
            r"
            enum RoleEnum { ADMIN }
            type UserType { id: ID! }
            scalar DateScalar
            ",
            "type_kind_suffix",
        );
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Type 'DateScalar' should not end with the kind suffix 'Scalar'",
                "Type 'RoleEnum' should not end with the kind suffix 'Enum'",
                "Type 'UserType' should not end with the kind suffix 'Type'",
            ]
        );
        assert_eq!(diagnostics[1].suggested_fix.as_deref(), Some("Role"));
    }

    #[test]
    fn test_bare_suffix_and_lowercase_tail_pass() {
        let diagnostics = lint_rule(
            r"
            type Type { name: String }
            type Prototype { name: String }
            ",
            "type_kind_suffix",
        );
        assert!(diagnostics.is_empty());
    }
}
