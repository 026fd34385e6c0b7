use crate::config::StyleConfig;
use crate::heuristics::Heuristics;
use crate::naming;
use graphql_style_hir::{SymbolTable, TypeDef, TypeDefKind};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Roles input types play, derived from how arguments use them
///
/// Collected once per run so input rules don't rescan the schema.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SchemaRoles {
    filter_inputs: BTreeSet<Arc<str>>,
    draft_inputs: BTreeSet<Arc<str>>,
}

impl SchemaRoles {
    #[must_use]
    pub fn collect(table: &SymbolTable) -> Self {
        let mut roles = Self::default();

        for type_def in table.types() {
            for field in &type_def.fields {
                for arg in &field.arguments {
                    if arg.name.as_ref() == "filter"
                        && table.kind_of(&arg.type_ref) == Some(TypeDefKind::InputObject)
                    {
                        roles.filter_inputs.insert(arg.type_ref.name.clone());
                    }
                }
            }
        }

        if let Some(mutation) = table.mutation_type() {
            for field in &mutation.fields {
                if naming::strip_verb(&field.name, "create").is_none() {
                    continue;
                }
                if let Some(draft) = field.argument("draft") {
                    roles.draft_inputs.insert(draft.type_ref.name.clone());
                }
            }
        }

        roles
    }

    /// Input type passed to some argument named `filter`
    #[must_use]
    pub fn is_filter_input(&self, type_name: &str) -> bool {
        self.filter_inputs.contains(type_name)
    }

    /// Input type passed as the `draft` of a `create*` mutation
    #[must_use]
    pub fn is_draft_input(&self, type_name: &str) -> bool {
        self.draft_inputs.contains(type_name)
    }
}

/// Everything a rule may consult while checking one entity
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub table: &'a SymbolTable,
    pub config: &'a StyleConfig,
    pub heuristics: &'a Heuristics,
    pub roles: &'a SchemaRoles,
    /// Options configured for the rule being run
    pub options: Option<&'a serde_json::Value>,
}

impl RuleContext<'_> {
    /// Fields declared on the root mutation type
    #[must_use]
    pub fn is_mutation_root(&self, type_def: &TypeDef) -> bool {
        self.table.is_mutation_type(&type_def.name)
    }

    /// Fields declared on the root query type
    #[must_use]
    pub fn is_query_root(&self, type_def: &TypeDef) -> bool {
        self.table.is_query_type(&type_def.name)
    }
}
