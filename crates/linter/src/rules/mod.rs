/// Convention rule implementations
///
/// Each rule lives in its own file and implements `LintRule` plus the entity
/// traits for the schema elements it inspects:
/// - `TypeRule` - named types
/// - `FieldRule` - fields of objects, interfaces and input objects
/// - `ArgumentRule` - field arguments
mod boolean_prefix;
mod by_id_query_shape;
mod collection_query_shape;
mod create_mutation_shape;
mod delete_mutation_shape;
mod enum_value_casing;
mod field_casing;
mod field_plurality;
mod field_redundant_name;
mod filter_suffix;
mod id_field_presence;
mod input_suffix;
mod mutation_naming;
mod mutation_result_shape;
mod type_casing;
mod type_kind_suffix;
mod type_singular;

pub use boolean_prefix::{BooleanPrefixMode, BooleanPrefixOptions, BooleanPrefixRuleImpl};
pub use by_id_query_shape::ByIdQueryShapeRuleImpl;
pub use collection_query_shape::CollectionQueryShapeRuleImpl;
pub use create_mutation_shape::CreateMutationShapeRuleImpl;
pub use delete_mutation_shape::DeleteMutationShapeRuleImpl;
pub use enum_value_casing::EnumValueCasingRuleImpl;
pub use field_casing::FieldCasingRuleImpl;
pub use field_plurality::FieldPluralityRuleImpl;
pub use field_redundant_name::FieldRedundantNameRuleImpl;
pub use filter_suffix::FilterSuffixRuleImpl;
pub use id_field_presence::IdFieldPresenceRuleImpl;
pub use input_suffix::{InputSuffixOptions, InputSuffixRuleImpl};
pub use mutation_naming::MutationNamingRuleImpl;
pub use mutation_result_shape::MutationResultShapeRuleImpl;
pub use type_casing::TypeCasingRuleImpl;
pub use type_kind_suffix::TypeKindSuffixRuleImpl;
pub use type_singular::TypeSingularRuleImpl;

#[cfg(test)]
pub(crate) mod test_helpers {
    use crate::config::StyleConfig;
    use crate::diagnostics::LintDiagnostic;
    use crate::linter::Linter;
    use graphql_style_hir::SymbolTable;

    /// Run the full linter and keep only one rule's diagnostics
    pub fn lint_rule(sdl: &str, rule: &str) -> Vec<LintDiagnostic> {
        lint_rule_with(sdl, rule, StyleConfig::default())
    }

    pub fn lint_rule_with(sdl: &str, rule: &str, config: StyleConfig) -> Vec<LintDiagnostic> {
        let table = SymbolTable::from_source(sdl, "schema.graphql").unwrap();
        Linter::new(config)
            .lint(&table)
            .into_iter()
            .filter(|d| d.rule == rule)
            .collect()
    }

    pub fn messages(diagnostics: &[LintDiagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}
