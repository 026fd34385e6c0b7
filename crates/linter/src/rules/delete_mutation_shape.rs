use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::naming::strip_verb;
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{FieldSignature, TypeDef};

/// Lint rule that requires `delete<Entity>` mutations to take an `id: ID!` argument
pub struct DeleteMutationShapeRuleImpl;

impl LintRule for DeleteMutationShapeRuleImpl {
    fn name(&self) -> &'static str {
        "delete_mutation_shape"
    }

    fn description(&self) -> &'static str {
        "Delete mutations must take an id argument"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl FieldRule for DeleteMutationShapeRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        if !ctx.is_mutation_root(type_def) || strip_verb(&field.name, "delete").is_none() {
            return Vec::new();
        }

        let has_id = field
            .argument("id")
            .is_some_and(|arg| arg.type_ref.is_non_null_named("ID"));
        if has_id {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_field(field),
            format!("Mutation '{}' should take an 'id: ID!' argument", field.name),
            self.name(),
        )
        .with_fix("id: ID!")]
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_helpers::{lint_rule, messages};

    #[test]
    fn test_id_argument() {
        let diagnostics = lint_rule(
            "type Mutation { deleteUser(id: ID!, reason: String): Int }",
            "delete_mutation_shape",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_id() {
        let diagnostics = lint_rule(
            "type Mutation { deleteUser(userId: ID!): Int }",
            "delete_mutation_shape",
        );
        assert_eq!(
            messages(&diagnostics),
            vec!["Mutation 'deleteUser' should take an 'id: ID!' argument"]
        );
    }

    #[test]
    fn test_nullable_id() {
        let diagnostics = lint_rule(
            "type Mutation { deleteUser(id: ID): Int }",
            "delete_mutation_shape",
        );
        assert_eq!(diagnostics.len(), 1);
    }
}
