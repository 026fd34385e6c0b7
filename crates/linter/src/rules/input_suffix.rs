use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::traits::{LintRule, TypeRule};
use graphql_style_hir::{TypeDef, TypeDefKind};
use serde::Deserialize;

/// Options for the `input_suffix` rule
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSuffixOptions {
    /// Required suffix for input type names. Defaults to "Input".
    pub suffix: String,
}

impl Default for InputSuffixOptions {
    fn default() -> Self {
        Self {
            suffix: "Input".to_string(),
        }
    }
}

impl InputSuffixOptions {
    /// Options are checked by `StyleConfig::validate`, so a value that
    /// still fails here falls back to the defaults.
    fn from_json(value: Option<&serde_json::Value>) -> Self {
        value
            .and_then(|v| Self::parse(v).ok())
            .unwrap_or_default()
    }

    fn parse(value: &serde_json::Value) -> serde_json::Result<Self> {
        Self::deserialize(value)
    }
}

/// Lint rule that enforces naming convention for input types
///
/// Input type names should end with "Input" (or a configurable suffix) to
/// distinguish them from output types. Inputs used as a `filter` argument or
/// as the `draft` of a `create` mutation follow their own conventions and are
/// skipped here.
pub struct InputSuffixRuleImpl;

impl LintRule for InputSuffixRuleImpl {
    fn name(&self) -> &'static str {
        "input_suffix"
    }

    fn description(&self) -> &'static str {
        "Input type names must end with a specific suffix"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }

    fn validate_options(&self, options: &serde_json::Value) -> Result<(), String> {
        InputSuffixOptions::parse(options)
            .map(drop)
            .map_err(|err| format!("{err}"))
    }
}

impl TypeRule for InputSuffixRuleImpl {
    fn check_type(&self, ctx: &RuleContext<'_>, type_def: &TypeDef) -> Vec<LintDiagnostic> {
        if type_def.kind != TypeDefKind::InputObject
            || ctx.roles.is_filter_input(&type_def.name)
            || ctx.roles.is_draft_input(&type_def.name)
        {
            return Vec::new();
        }

        let opts = InputSuffixOptions::from_json(ctx.options);
        if opts.suffix.is_empty() || type_def.name.ends_with(&opts.suffix) {
            return Vec::new();
        }

        vec![LintDiagnostic::error(
            DiagnosticLocation::for_type(type_def),
            format!(
                "Input type '{}' should end with '{}'",
                type_def.name, opts.suffix
            ),
            self.name(),
        )
        .with_fix(format!("{}{}", type_def.name, opts.suffix))]
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StyleConfig;
    use crate::rules::test_helpers::{lint_rule, lint_rule_with, messages};

    #[test]
    fn test_input_with_suffix() {
        let diagnostics = lint_rule("input UpdateUserInput { name: String! }", "input_suffix");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_input_without_suffix() {
        let diagnostics = lint_rule("input UpdateUser { name: String! }", "input_suffix");
        assert_eq!(
            messages(&diagnostics),
            vec!["Input type 'UpdateUser' should end with 'Input'"]
        );
        assert_eq!(
            diagnostics[0].suggested_fix.as_deref(),
            Some("UpdateUserInput")
        );
    }

    #[test]
    fn test_filter_and_draft_roles_are_exempt() {
        let diagnostics = lint_rule(
            r"
            type Query { users(filter: UserFilter): [User!]! }
            type Mutation { createUser(draft: UserDraft!): Int }
            type User { id: ID! }
            input UserFilter { name: String }
            input UserDraft { name: String }
            ",
            "input_suffix",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_custom_suffix() {
        let config: StyleConfig =
            serde_json::from_str(r#"{ "rules": { "input_suffix": ["error", { "suffix": "Args" }] } }"#)
                .unwrap();
        let diagnostics = lint_rule_with(
            "input UserArgs { name: String }\ninput UserInput { name: String }",
            "input_suffix",
            config,
        );
        assert_eq!(
            messages(&diagnostics),
            vec!["Input type 'UserInput' should end with 'Args'"]
        );
    }

    #[test]
    fn test_output_types_ignored() {
        let diagnostics = lint_rule("type User { id: ID! }", "input_suffix");
        assert!(diagnostics.is_empty());
    }
}
