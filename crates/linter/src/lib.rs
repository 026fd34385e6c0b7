// GraphQL schema convention linter
//
// Rules inspect a resolved `SymbolTable` one entity at a time. The `Linter`
// applies configured severities and the `Report` orders and renders the
// results.

mod config;
mod context;
mod diagnostics;
mod heuristics;
mod linter;
pub mod naming;
mod registry;
mod report;
mod rules;
mod traits;

pub use config::{LintRuleConfig, RuleSeverity, StyleConfig, DEFAULT_MUTATION_VERBS};
pub use context::{RuleContext, SchemaRoles};
pub use diagnostics::{DiagnosticLocation, LintDiagnostic, LintSeverity};
pub use heuristics::{
    DefaultEntityHeuristic, EnglishPluralHeuristic, EntityHeuristic, Heuristics, PluralHeuristic,
    Plurality,
};
pub use linter::Linter;
pub use registry::{
    all_rule_names, all_rules, argument_rules, catalog_index, field_rules, type_rules,
};
pub use report::{escape_data, escape_property, Report, Verdict};
pub use rules::{BooleanPrefixMode, BooleanPrefixOptions, InputSuffixOptions};
pub use traits::{ArgumentRule, FieldRule, LintRule, TypeRule};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// the linter. Import with:
///
/// ```rust,ignore
/// use graphql_style_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{RuleSeverity, StyleConfig};
    pub use crate::diagnostics::{LintDiagnostic, LintSeverity};
    pub use crate::linter::Linter;
    pub use crate::report::{Report, Verdict};
    pub use crate::traits::LintRule;
}
