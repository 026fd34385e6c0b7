use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Structural failures that stop analysis before any style rule runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Failed to parse schema:\n{0}")]
    Parse(String),

    #[error("Type '{name}' is defined more than once")]
    DuplicateTypeName { name: String },

    #[error("Field '{field_name}' is defined more than once on type '{type_name}'")]
    DuplicateFieldName {
        type_name: String,
        field_name: String,
    },

    #[error("Unknown type '{type_name}' referenced from {referenced_from}")]
    UnresolvedTypeReference {
        type_name: String,
        referenced_from: String,
    },

    #[error("Extension of '{name}' does not match the kind of its base type ({expected})")]
    ExtensionKindMismatch { name: String, expected: String },
}

impl BuildError {
    /// Stable identifier of the failure class
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse_error",
            Self::DuplicateTypeName { .. } => "duplicate_type_name",
            Self::DuplicateFieldName { .. } => "duplicate_field_name",
            Self::UnresolvedTypeReference { .. } => "unresolved_type_reference",
            Self::ExtensionKindMismatch { .. } => "extension_kind_mismatch",
        }
    }
}
