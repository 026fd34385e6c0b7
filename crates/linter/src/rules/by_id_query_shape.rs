use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{FieldSignature, TypeDef};

/// Lint rule that requires by-id queries to return a nullable type
///
/// A root query field taking exactly one `id: ID!` argument and returning a
/// single item represents "not found" as null, never as an error.
///
/// ```graphql
/// # Bad
/// type Query { user(id: ID!): User! }
///
/// # Good
/// type Query { user(id: ID!): User }
/// ```
pub struct ByIdQueryShapeRuleImpl;

impl LintRule for ByIdQueryShapeRuleImpl {
    fn name(&self) -> &'static str {
        "by_id_query_shape"
    }

    fn description(&self) -> &'static str {
        "By-id queries must return a nullable type"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl FieldRule for ByIdQueryShapeRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        if !ctx.is_query_root(type_def) || field.type_ref.is_list || !field.type_ref.is_non_null {
            return Vec::new();
        }

        let by_id = match field.arguments.as_slice() {
            [only] => only.name.as_ref() == "id" && only.type_ref.is_non_null_named("ID"),
            _ => false,
        };
        if !by_id {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_field(field),
            format!(
                "Query '{}' fetches a single item by id and should return a nullable type, found '{}'",
                field.name, field.type_ref
            ),
            self.name(),
        )
        .with_fix(field.type_ref.name.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_helpers::{lint_rule, messages};

    fn schema(field: &str) -> String {
        format!("type Query {{ {field} }}\ntype User {{ id: ID! }}")
    }

    #[test]
    fn test_non_null_by_id() {
        let diagnostics = lint_rule(&schema("user(id: ID!): User!"), "by_id_query_shape");
        assert_eq!(
            messages(&diagnostics),
            vec!["Query 'user' fetches a single item by id and should return a nullable type, found 'User!'"]
        );
        assert_eq!(diagnostics[0].suggested_fix.as_deref(), Some("User"));
    }

    #[test]
    fn test_nullable_by_id() {
        assert!(lint_rule(&schema("user(id: ID!): User"), "by_id_query_shape").is_empty());
    }

    #[test]
    fn test_not_a_by_id_query() {
        for field in [
            "user(id: ID!, locale: String): User!",
            "user(id: ID): User!",
            "user(key: ID!): User!",
            "users(id: ID!): [User!]!",
        ] {
            assert!(lint_rule(&schema(field), "by_id_query_shape").is_empty(), "{field}");
        }
    }
}
