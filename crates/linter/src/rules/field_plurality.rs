use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::heuristics::Plurality;
use crate::naming::last_word;
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{FieldSignature, TypeDef};

/// Lint rule that matches a field name's number to its type
///
/// List fields should read as plural and single-valued fields as singular.
/// Non-list `Boolean` fields and fields returning a `*Connection` type are
/// skipped, and words the plural heuristic can't classify stay silent.
pub struct FieldPluralityRuleImpl;

impl LintRule for FieldPluralityRuleImpl {
    fn name(&self) -> &'static str {
        "field_plurality"
    }

    fn description(&self) -> &'static str {
        "List fields should be plural and other fields singular"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn is_heuristic(&self) -> bool {
        true
    }
}

impl FieldRule for FieldPluralityRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        _type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        let Some(word) = last_word(&field.name) else {
            return Vec::new();
        };
        let plurality = ctx.heuristics.plural.classify(word);
        let type_ref = &field.type_ref;

        let message = if type_ref.is_list {
            (plurality == Plurality::Singular).then(|| {
                format!(
                    "List field '{}.{}' should have a plural name",
                    field.parent_type, field.name
                )
            })
        } else if type_ref.name.as_ref() == "Boolean" || type_ref.name.ends_with("Connection") {
            None
        } else {
            (plurality == Plurality::Plural).then(|| {
                format!(
                    "Field '{}.{}' returns a single value and should have a singular name",
                    field.parent_type, field.name
                )
            })
        };

        message
            .map(|message| {
                LintDiagnostic::warning(DiagnosticLocation::for_field(field), message, self.name())
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::test_helpers::{lint_rule, messages};

    #[test]
    fn test_matching_names_pass() {
        let diagnostics = lint_rule(
            r"
            type User {
              friends: [User!]!
              address: String
              metadata: [String!]
              tagIds: [ID!]!
              hasChildren: Boolean
            }
            ",
            "field_plurality",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_singular_list_field() {
        let diagnostics = lint_rule("type User { friend: [User!]! }", "field_plurality");
        assert_eq!(
            messages(&diagnostics),
            vec!["List field 'User.friend' should have a plural name"]
        );
    }

    #[test]
    fn test_plural_single_value_field() {
        let diagnostics = lint_rule("type User { emails: String }", "field_plurality");
        assert_eq!(
            messages(&diagnostics),
            vec!["Field 'User.emails' returns a single value and should have a singular name"]
        );
    }

    #[test]
    fn test_connection_fields_are_skipped() {
        let diagnostics = lint_rule(
            r"
            type User { friends: UserConnection! }
            type UserConnection { totalCount: Int }
            ",
            "field_plurality",
        );
        assert!(diagnostics.is_empty());
    }
}
