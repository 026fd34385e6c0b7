//! Swappable judgments that cannot be mechanized exactly
//!
//! Rules that depend on these report at most a warning. An inconclusive
//! answer means the rule stays silent.

use graphql_style_hir::{SymbolTable, TypeDef, TypeDefKind};
use std::sync::Arc;

/// Grammatical number of a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plurality {
    Singular,
    Plural,
    Unknown,
}

/// Classifies a word as singular or plural
pub trait PluralHeuristic: Send + Sync {
    fn classify(&self, word: &str) -> Plurality;
}

/// Decides whether an object type represents a persisted, identifiable resource
pub trait EntityHeuristic: Send + Sync {
    fn is_entity(&self, table: &SymbolTable, type_def: &TypeDef) -> bool;
}

const IRREGULAR_PLURALS: &[&str] = &[
    "people", "children", "men", "women", "mice", "geese", "feet", "teeth", "criteria",
    "phenomena", "indices", "matrices", "vertices", "analyses", "aliases", "statuses",
    "addresses", "buses",
];

const IRREGULAR_SINGULARS: &[&str] = &[
    "person", "child", "man", "woman", "mouse", "goose", "foot", "tooth", "criterion",
    "phenomenon", "index", "matrix", "vertex", "alias", "atlas", "bias", "canvas", "gas",
    "lens", "chaos", "cosmos", "ethos", "pathos", "yes",
];

/// Same form in singular and plural
const UNCOUNTABLE: &[&str] = &[
    "data", "information", "metadata", "news", "media", "series", "species", "feedback",
    "equipment", "software", "hardware", "sheep", "fish", "deer", "staff", "moose",
];

/// Suffix-based English plural detection with exception tables
///
/// - shorter than 3 letters, or containing non-letters: unknown
/// - uncountable nouns: unknown
/// - listed irregular forms win over suffix checks
/// - `-ss`, `-us`, `-is`: singular
/// - any other `-s`: plural
/// - everything else: singular
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishPluralHeuristic;

impl PluralHeuristic for EnglishPluralHeuristic {
    fn classify(&self, word: &str) -> Plurality {
        if word.len() < 3 || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Plurality::Unknown;
        }

        let word = word.to_ascii_lowercase();
        let word = word.as_str();

        if UNCOUNTABLE.contains(&word) {
            return Plurality::Unknown;
        }
        if IRREGULAR_PLURALS.contains(&word) {
            return Plurality::Plural;
        }
        if IRREGULAR_SINGULARS.contains(&word) {
            return Plurality::Singular;
        }

        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            Plurality::Singular
        } else if word.ends_with('s') {
            Plurality::Plural
        } else {
            Plurality::Singular
        }
    }
}

/// Type name suffixes that mark supporting types rather than entities
const NON_ENTITY_SUFFIXES: &[&str] = &["Error", "Result", "Payload", "Connection", "Edge", "PageInfo"];

/// Default entity detection
///
/// An object type is an entity when it:
/// - is not a root operation type
/// - is not returned by a root mutation field
/// - has no supporting-type suffix (`Error`, `Result`, `Payload`, `Connection`, `Edge`, `PageInfo`)
/// - has at least one scalar or enum field other than `id`
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEntityHeuristic;

impl EntityHeuristic for DefaultEntityHeuristic {
    fn is_entity(&self, table: &SymbolTable, type_def: &TypeDef) -> bool {
        if type_def.kind != TypeDefKind::Object || table.is_root_type(&type_def.name) {
            return false;
        }
        if NON_ENTITY_SUFFIXES
            .iter()
            .any(|suffix| type_def.name.ends_with(suffix))
        {
            return false;
        }

        let is_mutation_result = table.mutation_type().is_some_and(|mutation| {
            mutation
                .fields
                .iter()
                .any(|field| field.type_ref.name == type_def.name)
        });
        if is_mutation_result {
            return false;
        }

        type_def
            .fields
            .iter()
            .any(|field| field.name.as_ref() != "id" && table.is_scalar_or_enum(&field.type_ref))
    }
}

/// The heuristics a linter run consults
#[derive(Clone)]
pub struct Heuristics {
    pub plural: Arc<dyn PluralHeuristic>,
    pub entity: Arc<dyn EntityHeuristic>,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            plural: Arc::new(EnglishPluralHeuristic),
            entity: Arc::new(DefaultEntityHeuristic),
        }
    }
}

impl std::fmt::Debug for Heuristics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heuristics").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(word: &str) -> Plurality {
        EnglishPluralHeuristic.classify(word)
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(classify("users"), Plurality::Plural);
        assert_eq!(classify("Countries"), Plurality::Plural);
        assert_eq!(classify("ids"), Plurality::Plural);
        assert_eq!(classify("Settings"), Plurality::Plural);
    }

    #[test]
    fn test_singular_suffixes() {
        assert_eq!(classify("address"), Plurality::Singular);
        assert_eq!(classify("status"), Plurality::Singular);
        assert_eq!(classify("analysis"), Plurality::Singular);
        assert_eq!(classify("user"), Plurality::Singular);
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(classify("people"), Plurality::Plural);
        assert_eq!(classify("children"), Plurality::Plural);
        assert_eq!(classify("person"), Plurality::Singular);
        assert_eq!(classify("alias"), Plurality::Singular);
        assert_eq!(classify("addresses"), Plurality::Plural);
    }

    #[test]
    fn test_inconclusive() {
        assert_eq!(classify("data"), Plurality::Unknown);
        assert_eq!(classify("News"), Plurality::Unknown);
        assert_eq!(classify("series"), Plurality::Unknown);
        assert_eq!(classify("id"), Plurality::Unknown);
        assert_eq!(classify("v2s"), Plurality::Unknown);
        assert_eq!(classify(""), Plurality::Unknown);
    }

    fn table(sdl: &str) -> SymbolTable {
        SymbolTable::from_source(sdl, "schema.graphql").unwrap()
    }

    #[test]
    fn test_entity_detection() {
        let table = table(
            r"
            type Query { user: User }
            type Mutation { createUser: CreateUserResult! }
            type User { id: ID! name: String }
            type Address { street: String }
            type CreateUserResult { success: Boolean! }
            type UserError { message: String! }
            type UserConnection { edges: [UserEdge!]! }
            type UserEdge { node: User }
            type OnlyId { id: ID! }
            ",
        );
        let heuristic = DefaultEntityHeuristic;
        let is_entity = |name: &str| heuristic.is_entity(&table, table.get(name).unwrap());

        assert!(is_entity("User"));
        assert!(is_entity("Address"));
        assert!(!is_entity("Query"));
        assert!(!is_entity("Mutation"));
        assert!(!is_entity("CreateUserResult"));
        assert!(!is_entity("UserError"));
        assert!(!is_entity("UserConnection"));
        assert!(!is_entity("UserEdge"));
        assert!(!is_entity("OnlyId"));
    }

    #[test]
    fn test_mutation_result_without_suffix_is_not_entity() {
        let table = table(
            r"
            type Mutation { createUser: UserOutcome! }
            type UserOutcome { success: Boolean! message: String }
            ",
        );
        assert!(!DefaultEntityHeuristic.is_entity(&table, table.get("UserOutcome").unwrap()));
    }
}
