use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::naming::split_words;
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{FieldSignature, TypeDef};

/// Lint rule that requires root mutation fields to read as `<verb><Object>`
///
/// The verb is the first camelCase word and must be one of the configured
/// `allowedMutationVerbs`; at least one more word must follow it.
///
/// ```graphql
/// # Bad
/// type Mutation { newUser(user: UserInput!): NewUserResult! }
///
/// # Good
/// type Mutation { createUser(draft: UserDraft!): CreateUserResult! }
/// ```
pub struct MutationNamingRuleImpl;

impl LintRule for MutationNamingRuleImpl {
    fn name(&self) -> &'static str {
        "mutation_naming"
    }

    fn description(&self) -> &'static str {
        "Mutation names must start with an allowed verb followed by the object name"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }
}

impl FieldRule for MutationNamingRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        if !ctx.is_mutation_root(type_def) {
            return Vec::new();
        }

        let words = split_words(&field.name);
        let follows_convention = words.len() > 1
            && words
                .first()
                .is_some_and(|verb| {
                    field.name.starts_with(verb) && ctx.config.is_allowed_mutation_verb(verb)
                });
        if follows_convention {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_field(field),
            format!(
                "Mutation '{}' should start with one of the allowed verbs ({}) followed by the object name",
                field.name,
                ctx.config.allowed_mutation_verbs.join(", ")
            ),
            self.name(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StyleConfig;
    use crate::diagnostics::LintSeverity;
    use crate::rules::test_helpers::{lint_rule, lint_rule_with, messages};

    const NEW_USER: &str = r"
        type Mutation { newUser(user: UserInput!): NewUserResult! }
        input UserInput { name: String }
        type NewUserResult { success: Boolean! }
    ";

    #[test]
    fn test_disallowed_verb() {
        let diagnostics = lint_rule(NEW_USER, "mutation_naming");
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Mutation 'newUser' should start with one of the allowed verbs (create, update, delete, set, track) followed by the object name"
            ]
        );
        assert_eq!(diagnostics[0].severity, LintSeverity::Error);
        assert_eq!(diagnostics[0].rule, "mutation_naming");
    }

    #[test]
    fn test_allowed_verbs_pass() {
        let diagnostics = lint_rule(
            r"
            type Mutation {
              createUser: Int
              updateUserEmail: Int
              deleteUser: Int
              setUserRole: Int
              trackPageView: Int
            }
            ",
            "mutation_naming",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_verb_without_object() {
        let diagnostics = lint_rule("type Mutation { create: Int }", "mutation_naming");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_verb_must_open_the_name() {
        let diagnostics = lint_rule("type Mutation { _createUser: Int }", "mutation_naming");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_only_root_mutation_fields() {
        let diagnostics = lint_rule("type Query { newUser: Int }", "mutation_naming");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_configured_verbs() {
        let config = StyleConfig {
            allowed_mutation_verbs: vec!["new".to_string()],
            ..StyleConfig::default()
        };
        assert!(lint_rule_with(NEW_USER, "mutation_naming", config).is_empty());
    }
}
