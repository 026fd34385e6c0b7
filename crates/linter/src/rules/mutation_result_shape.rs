use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{FieldSignature, TypeDef, TypeDefKind};

/// Lint rule that checks the shape of root mutation result types
///
/// Every mutation returns a non-null object carrying `success: Boolean!` and
/// `errors: [<X>Error!]!`. All missing pieces are reported together in one
/// diagnostic per mutation.
pub struct MutationResultShapeRuleImpl;

impl LintRule for MutationResultShapeRuleImpl {
    fn name(&self) -> &'static str {
        "mutation_result_shape"
    }

    fn description(&self) -> &'static str {
        "Mutations must return a non-null result type with success and errors fields"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl FieldRule for MutationResultShapeRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        if !ctx.is_mutation_root(type_def) {
            return Vec::new();
        }

        let mut problems = Vec::new();
        if !field.type_ref.is_non_null {
            problems.push("result type is nullable".to_string());
        }

        let result_type = ctx
            .table
            .output_type(field)
            .filter(|t| matches!(t.kind, TypeDefKind::Object | TypeDefKind::Interface));

        match result_type {
            Some(result_type) if !field.type_ref.is_list => {
                if !has_success_field(result_type) {
                    problems.push("missing 'success: Boolean!'".to_string());
                }
                if !has_errors_field(result_type) {
                    problems.push("missing 'errors: [<X>Error!]!'".to_string());
                }
            }
            _ => problems.push(format!(
                "result type '{}' is not an object type",
                field.type_ref
            )),
        }

        if problems.is_empty() {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_field(field),
            format!(
                "Mutation '{}' should return a non-null result type with 'success: Boolean!' and 'errors: [<X>Error!]!' ({})",
                field.name,
                problems.join("; ")
            ),
            self.name(),
        )]
    }
}

fn has_success_field(result_type: &TypeDef) -> bool {
    result_type
        .fields
        .iter()
        .any(|f| f.name.as_ref() == "success" && f.type_ref.is_non_null_named("Boolean"))
}

/// `errors: [<X>Error!]!`, a non-null list of non-null error items
fn has_errors_field(result_type: &TypeDef) -> bool {
    result_type.fields.iter().any(|f| {
        let ty = &f.type_ref;
        f.name.as_ref() == "errors"
            && ty.is_list
            && ty.list_depth == 1
            && ty.is_non_null
            && ty.inner_non_null
            && ty.name.ends_with("Error")
    })
}
