/// Registry of all available lint rules
///
/// Rules are listed in catalog order. That order is also the tie-breaker
/// when sorting a report, so appending a rule never reshuffles existing
/// output.
use crate::rules::{
    BooleanPrefixRuleImpl, ByIdQueryShapeRuleImpl, CollectionQueryShapeRuleImpl,
    CreateMutationShapeRuleImpl, DeleteMutationShapeRuleImpl, EnumValueCasingRuleImpl,
    FieldCasingRuleImpl, FieldPluralityRuleImpl, FieldRedundantNameRuleImpl,
    FilterSuffixRuleImpl, IdFieldPresenceRuleImpl, InputSuffixRuleImpl, MutationNamingRuleImpl,
    MutationResultShapeRuleImpl, TypeCasingRuleImpl, TypeKindSuffixRuleImpl,
    TypeSingularRuleImpl,
};
use crate::traits::{ArgumentRule, FieldRule, LintRule, TypeRule};
use std::sync::{Arc, LazyLock};

/// Every rule once, in catalog order.
static ALL_RULES: LazyLock<Vec<Arc<dyn LintRule>>> = LazyLock::new(|| {
    vec![
        Arc::new(TypeCasingRuleImpl),
        Arc::new(TypeSingularRuleImpl),
        Arc::new(TypeKindSuffixRuleImpl),
        Arc::new(InputSuffixRuleImpl),
        Arc::new(FilterSuffixRuleImpl),
        Arc::new(FieldCasingRuleImpl),
        Arc::new(FieldPluralityRuleImpl),
        Arc::new(FieldRedundantNameRuleImpl),
        Arc::new(MutationNamingRuleImpl),
        Arc::new(MutationResultShapeRuleImpl),
        Arc::new(CreateMutationShapeRuleImpl),
        Arc::new(DeleteMutationShapeRuleImpl),
        Arc::new(CollectionQueryShapeRuleImpl),
        Arc::new(ByIdQueryShapeRuleImpl),
        Arc::new(IdFieldPresenceRuleImpl),
        Arc::new(EnumValueCasingRuleImpl),
        Arc::new(BooleanPrefixRuleImpl),
    ]
});

/// Lazily initialized type rules.
/// Rules are created once and reused across all calls.
static TYPE_RULES: LazyLock<Vec<Arc<dyn TypeRule>>> = LazyLock::new(|| {
    vec![
        Arc::new(TypeCasingRuleImpl),
        Arc::new(TypeSingularRuleImpl),
        Arc::new(TypeKindSuffixRuleImpl),
        Arc::new(InputSuffixRuleImpl),
        Arc::new(FilterSuffixRuleImpl),
        Arc::new(IdFieldPresenceRuleImpl),
        Arc::new(EnumValueCasingRuleImpl),
    ]
});

/// Lazily initialized field rules.
/// Rules are created once and reused across all calls.
static FIELD_RULES: LazyLock<Vec<Arc<dyn FieldRule>>> = LazyLock::new(|| {
    vec![
        Arc::new(FieldCasingRuleImpl),
        Arc::new(FieldPluralityRuleImpl),
        Arc::new(FieldRedundantNameRuleImpl),
        Arc::new(MutationNamingRuleImpl),
        Arc::new(MutationResultShapeRuleImpl),
        Arc::new(CreateMutationShapeRuleImpl),
        Arc::new(DeleteMutationShapeRuleImpl),
        Arc::new(CollectionQueryShapeRuleImpl),
        Arc::new(ByIdQueryShapeRuleImpl),
        Arc::new(BooleanPrefixRuleImpl),
    ]
});

/// Lazily initialized argument rules.
/// Rules are created once and reused across all calls.
static ARGUMENT_RULES: LazyLock<Vec<Arc<dyn ArgumentRule>>> =
    LazyLock::new(|| vec![Arc::new(FieldCasingRuleImpl)]);

#[must_use]
pub fn all_rules() -> &'static [Arc<dyn LintRule>] {
    &ALL_RULES
}

#[must_use]
pub fn type_rules() -> &'static [Arc<dyn TypeRule>] {
    &TYPE_RULES
}

#[must_use]
pub fn field_rules() -> &'static [Arc<dyn FieldRule>] {
    &FIELD_RULES
}

#[must_use]
pub fn argument_rules() -> &'static [Arc<dyn ArgumentRule>] {
    &ARGUMENT_RULES
}

/// Rule ids in catalog order
#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    ALL_RULES.iter().map(|rule| rule.name()).collect()
}

/// Position of a rule in the catalog; unknown ids sort last
#[must_use]
pub fn catalog_index(rule_name: &str) -> usize {
    ALL_RULES
        .iter()
        .position(|rule| rule.name() == rule_name)
        .unwrap_or(usize::MAX)
}
