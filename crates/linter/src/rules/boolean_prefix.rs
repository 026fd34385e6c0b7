use crate::context::RuleContext;
use crate::diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
use crate::naming::{first_word, to_camel_case};
use crate::traits::{FieldRule, LintRule};
use graphql_style_hir::{FieldSignature, TypeDef};
use serde::Deserialize;

/// Whether boolean fields must carry a predicate prefix or must not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanPrefixMode {
    #[default]
    Require,
    Forbid,
}

/// Options for the `boolean_prefix` rule
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanPrefixOptions {
    pub mode: BooleanPrefixMode,
    /// Leading words that mark a predicate. Defaults to `is`, `has`, `can`,
    /// `should`, `was`, `will`.
    pub prefixes: Vec<String>,
}

impl Default for BooleanPrefixOptions {
    fn default() -> Self {
        Self {
            mode: BooleanPrefixMode::default(),
            prefixes: ["is", "has", "can", "should", "was", "will"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl BooleanPrefixOptions {
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

/// Lint rule for predicate prefixes on boolean fields
///
/// Teams disagree on `isActive` versus `active`, so the rule is off unless
/// enabled and its `mode` option picks the convention. The `success` field of
/// mutation results is always exempt.
pub struct BooleanPrefixRuleImpl;

impl LintRule for BooleanPrefixRuleImpl {
    fn name(&self) -> &'static str {
        "boolean_prefix"
    }

    fn description(&self) -> &'static str {
        "Boolean fields should (or should not) start with a predicate prefix"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn validate_options(&self, options: &serde_json::Value) -> Result<(), String> {
        BooleanPrefixOptions::parse(options)
            .map(drop)
            .map_err(|err| format!("{err}"))
    }

    fn enabled_by_default(&self) -> bool {
        false
    }
}

impl FieldRule for BooleanPrefixRuleImpl {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        _type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic> {
        if field.type_ref.is_list
            || field.type_ref.name.as_ref() != "Boolean"
            || field.name.as_ref() == "success"
        {
            return Vec::new();
        }

        let opts = BooleanPrefixOptions::from_json(ctx.options);
        let prefix = first_word(&field.name).filter(|word| {
            field.name.starts_with(word) && opts.prefixes.iter().any(|prefix| prefix == word)
        });
        let location = DiagnosticLocation::for_field(field);

        match (opts.mode, prefix) {
            (BooleanPrefixMode::Require, None) => vec![LintDiagnostic::warning(
                location,
                format!(
                    "Boolean field '{}.{}' should start with one of: {}",
                    field.parent_type,
                    field.name,
                    opts.prefixes.join(", ")
                ),
                self.name(),
            )],
            (BooleanPrefixMode::Forbid, Some(prefix)) => {
                let rest = field.name.get(prefix.len()..).unwrap_or_default();
                let diagnostic = LintDiagnostic::warning(
                    location,
                    format!(
                        "Boolean field '{}.{}' should not start with '{prefix}'",
                        field.parent_type, field.name
                    ),
                    self.name(),
                );
                if rest.is_empty() {
                    vec![diagnostic]
                } else {
                    vec![diagnostic.with_fix(to_camel_case(rest))]
                }
            }
            _ => Vec::new(),
        }
    }
}
