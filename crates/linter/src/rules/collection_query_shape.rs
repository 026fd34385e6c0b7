use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{FieldSignature, TypeDef, TypeRef};

/// Lint rule that requires root query lists to be `[T!]!`
///
/// An empty collection is an empty list, never null, and it never contains
/// null items.
pub struct CollectionQueryShapeRuleImpl;

impl LintRule for CollectionQueryShapeRuleImpl {
    fn name(&self) -> &'static str {
        "collection_query_shape"
    }

    fn description(&self) -> &'static str {
        "Collection queries must return a non-null list of non-null items"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl FieldRule for CollectionQueryShapeRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        let type_ref = &field.type_ref;
        if !ctx.is_query_root(type_def)
            || !type_ref.is_list
            || (type_ref.is_non_null && type_ref.inner_non_null)
        {
            return Vec::new();
        }

        let expected = TypeRef {
            is_non_null: true,
            inner_non_null: true,
            ..type_ref.clone()
        };

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_field(field),
            format!(
                "Query '{}' should return a non-null list of non-null items, found '{type_ref}'",
                field.name
            ),
            self.name(),
        )
        .with_fix(expected.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_helpers::{lint_rule, messages};

    fn schema(return_type: &str) -> String {
        format!("type Query {{ countries: {return_type} }}\ntype Country {{ code: ID! }}")
    }

    #[test]
    fn test_non_null_list_of_non_null() {
        assert!(lint_rule(&schema("[Country!]!"), "collection_query_shape").is_empty());
    }

    #[test]
    fn test_nullable_variants() {
        for return_type in ["[Country]", "[Country!]", "[Country]!"] {
            let diagnostics = lint_rule(&schema(return_type), "collection_query_shape");
            assert_eq!(diagnostics.len(), 1, "{return_type}");
            assert_eq!(
                diagnostics[0].suggested_fix.as_deref(),
                Some("[Country!]!"),
                "{return_type}"
            );
        }
    }

    #[test]
    fn test_message() {
        let diagnostics = lint_rule(&schema("[Country]"), "collection_query_shape");
        assert_eq!(
            messages(&diagnostics),
            vec!["Query 'countries' should return a non-null list of non-null items, found '[Country]'"]
        );
    }

    #[test]
    fn test_non_root_lists_ignored() {
        let diagnostics = lint_rule(
            "type Country { code: ID! neighbours: [Country] }",
            "collection_query_shape",
        );
        assert!(diagnostics.is_empty());
    }
}
