use graphql_style_hir::{ArgumentDef, EnumValue, FieldSignature, SourcePosition, TypeDef};
use serde::Serialize;
use std::sync::Arc;

/// Where in the schema a diagnostic points
///
/// Enum values are reported through `field_name`, the slot a field would use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosticLocation {
    pub type_name: Arc<str>,
    pub field_name: Option<Arc<str>>,
    pub argument_name: Option<Arc<str>>,
    /// 1-based position of the offending name, when known
    pub position: Option<SourcePosition>,
}

impl DiagnosticLocation {
    #[must_use]
    pub fn for_type(type_def: &TypeDef) -> Self {
        Self {
            type_name: type_def.name.clone(),
            field_name: None,
            argument_name: None,
            position: Some(type_def.position),
        }
    }

    #[must_use]
    pub fn for_field(field: &FieldSignature) -> Self {
        Self {
            type_name: field.parent_type.clone(),
            field_name: Some(field.name.clone()),
            argument_name: None,
            position: Some(field.position),
        }
    }

    #[must_use]
    pub fn for_argument(field: &FieldSignature, argument: &ArgumentDef) -> Self {
        Self {
            type_name: field.parent_type.clone(),
            field_name: Some(field.name.clone()),
            argument_name: Some(argument.name.clone()),
            position: Some(argument.position),
        }
    }

    #[must_use]
    pub fn for_enum_value(type_def: &TypeDef, value: &EnumValue) -> Self {
        Self {
            type_name: type_def.name.clone(),
            field_name: Some(value.name.clone()),
            argument_name: None,
            position: Some(value.position),
        }
    }

    /// A location with no source position, named only by type
    #[must_use]
    pub fn named(type_name: impl Into<Arc<str>>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: None,
            argument_name: None,
            position: None,
        }
    }
}

impl std::fmt::Display for DiagnosticLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name)?;
        if let Some(field) = &self.field_name {
            write!(f, ".{field}")?;
        }
        if let Some(argument) = &self.argument_name {
            write!(f, "({argument})")?;
        }
        Ok(())
    }
}

/// A style violation found by a lint rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LintDiagnostic {
    pub location: DiagnosticLocation,
    /// Severity (from rule default or config override)
    pub severity: LintSeverity,
    /// Human-readable message
    pub message: String,
    /// Rule identifier (e.g., `"type_casing"`)
    pub rule: String,
    /// Replacement the author could apply, as plain text
    pub suggested_fix: Option<String>,
}

impl LintDiagnostic {
    /// Create a new lint diagnostic
    #[must_use]
    pub fn new(
        location: DiagnosticLocation,
        severity: LintSeverity,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            location,
            severity,
            message: message.into(),
            rule: rule.into(),
            suggested_fix: None,
        }
    }

    /// Create a warning diagnostic
    #[must_use]
    pub fn warning(
        location: DiagnosticLocation,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self::new(location, LintSeverity::Warning, message, rule)
    }

    /// Create an error diagnostic
    #[must_use]
    pub fn error(
        location: DiagnosticLocation,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self::new(location, LintSeverity::Error, message, rule)
    }

    /// Attach a suggested replacement
    #[must_use]
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fix = Some(fix.into());
        self
    }

    #[must_use]
    pub const fn has_fix(&self) -> bool {
        self.suggested_fix.is_some()
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, LintSeverity::Error)
    }
}

/// `<message> (<location>) [<rule>]`, the text every output format shares
impl std::fmt::Display for LintDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.message, self.location, self.rule)
    }
}

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}
