use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::naming::strip_verb;
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{FieldSignature, TypeDef};

/// Lint rule that requires `create<Entity>` mutations to take a single `draft: <Entity>Draft!`
///
/// ```graphql
/// # Bad
/// type Mutation { createUser(name: String!, email: String): CreateUserResult! }
///
/// # Good
/// type Mutation { createUser(draft: UserDraft!): CreateUserResult! }
/// ```
pub struct CreateMutationShapeRuleImpl;

impl LintRule for CreateMutationShapeRuleImpl {
    fn name(&self) -> &'static str {
        "create_mutation_shape"
    }

    fn description(&self) -> &'static str {
        "Create mutations must take exactly one draft argument"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl FieldRule for CreateMutationShapeRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        if !ctx.is_mutation_root(type_def) {
            return Vec::new();
        }
        let Some(entity) = strip_verb(&field.name, "create") else {
            return Vec::new();
        };

        let draft_type = format!("{entity}Draft");
        let conforms = match field.arguments.as_slice() {
            [only] => only.name.as_ref() == "draft" && only.type_ref.is_non_null_named(&draft_type),
            _ => false,
        };
        if conforms {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_field(field),
            format!(
                "Mutation '{}' should take exactly one argument 'draft: {draft_type}!'",
                field.name
            ),
            self.name(),
        )
        .with_fix(format!("draft: {draft_type}!"))]
    }
}
