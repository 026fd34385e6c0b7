/// Trait-based lint rule system
///
/// Every rule implements `LintRule` plus one entity trait per kind of schema
/// element it inspects. Rules are stateless; everything they need arrives
/// through the `RuleContext`.
use crate::context::RuleContext;
use crate::diagnostics::{LintDiagnostic, LintSeverity};
use graphql_style_hir::{ArgumentDef, FieldSignature, TypeDef};

/// Base trait for all lint rules
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g., `"type_casing"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Default severity (can be overridden by config)
    fn default_severity(&self) -> LintSeverity;

    /// Whether the rule relies on a heuristic and may report false positives
    fn is_heuristic(&self) -> bool {
        false
    }

    /// Rules that encode one of two competing conventions start disabled
    fn enabled_by_default(&self) -> bool {
        true
    }

    /// Check configured options before any linting happens
    ///
    /// Rules without options accept anything.
    fn validate_options(&self, _options: &serde_json::Value) -> Result<(), String> {
        Ok(())
    }
}

/// Lint rule that inspects a named type
pub trait TypeRule: LintRule {
    fn check_type(&self, ctx: &RuleContext<'_>, type_def: &TypeDef) -> Vec<LintDiagnostic>;
}

/// Lint rule that inspects a field of an object, interface or input type
pub trait FieldRule: LintRule {
    fn check_field(
        &self,
        ctx: &RuleContext<'_>,
        type_def: &TypeDef,
        field: &FieldSignature,
    ) -> Vec<LintDiagnostic>;
}

/// Lint rule that inspects an argument of a field
pub trait ArgumentRule: LintRule {
    fn check_argument(
        &self,
        ctx: &RuleContext<'_>,
        field: &FieldSignature,
        argument: &ArgumentDef,
    ) -> Vec<LintDiagnostic>;
}
