//! Exit codes for the graphql-style CLI.
//!
//! This module defines distinct exit codes for different error types,
//! allowing scripts and CI systems to distinguish between different
//! failure modes.

use graphql_style_config::ConfigError;
use graphql_style_hir::BuildError;

/// Exit codes used by the CLI.
///
/// These follow standard Unix conventions where 0 indicates success
/// and non-zero values indicate different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The schema passed: no errors, warnings within the allowed maximum
    Success = 0,
    /// Lint errors found, or more warnings than `--max-warnings` allows
    LintFailure = 1,
    /// Configuration error (unreadable, malformed or invalid config file)
    ConfigError = 2,
    /// The schema could not be analyzed (parse error, duplicate or unresolved names)
    SchemaError = 3,
    /// I/O error (schema file or stdin could not be read)
    IoError = 4,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Map a failure to the exit code of its class
    #[must_use]
    pub fn for_error(error: &anyhow::Error) -> Self {
        if error.downcast_ref::<ConfigError>().is_some() {
            Self::ConfigError
        } else if error.downcast_ref::<BuildError>().is_some() {
            Self::SchemaError
        } else {
            Self::IoError
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::LintFailure => write!(f, "lint failure"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema error"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::LintFailure.code(), 1);
        assert_eq!(ExitCode::ConfigError.code(), 2);
        assert_eq!(ExitCode::SchemaError.code(), 3);
        assert_eq!(ExitCode::IoError.code(), 4);
    }

    #[test]
    fn test_error_classification() {
        let config = anyhow::Error::new(ConfigError::UnsupportedFormat(PathBuf::from("a.toml")));
        assert_eq!(ExitCode::for_error(&config), ExitCode::ConfigError);

        let schema = anyhow::Error::new(BuildError::DuplicateTypeName {
            name: "User".to_string(),
        });
        assert_eq!(ExitCode::for_error(&schema), ExitCode::SchemaError);

        let io = anyhow::Error::new(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
            .context("Failed to read schema.graphql");
        assert_eq!(ExitCode::for_error(&io), ExitCode::IoError);
    }
}
