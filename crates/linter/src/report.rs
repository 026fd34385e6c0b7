//! Aggregation and rendering of lint results

use crate::diagnostics::{LintDiagnostic, LintSeverity};
use crate::registry::catalog_index;
use serde::Serialize;
use std::fmt::Write;

/// Overall outcome of a lint run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Sorted, deduplicated diagnostics of one run
///
/// Ordering depends only on the diagnostics themselves, so identical input
/// always renders identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    diagnostics: Vec<LintDiagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl Report {
    #[must_use]
    pub fn from_diagnostics(mut diagnostics: Vec<LintDiagnostic>) -> Self {
        diagnostics.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        diagnostics.dedup();

        let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
        let warning_count = diagnostics.len() - error_count;

        Self {
            diagnostics,
            error_count,
            warning_count,
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    #[must_use]
    pub const fn warning_count(&self) -> usize {
        self.warning_count
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.diagnostics.len()
    }

    /// `Fail` when any diagnostic is an error; warnings alone pass
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.error_count > 0 {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self.verdict(), Verdict::Pass)
    }

    /// One line per diagnostic: `<severity>: <message> (<location>) [<rule>]`
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(out, "{}: {diagnostic}", diagnostic.severity);
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let output = JsonReport {
            success: self.is_pass(),
            verdict: self.verdict(),
            stats: JsonStats {
                errors: self.error_count,
                warnings: self.warning_count,
                total: self.total(),
            },
            diagnostics: self.diagnostics.iter().map(JsonDiagnostic::from).collect(),
        };
        serde_json::to_string_pretty(&output)
    }

    /// GitHub Actions workflow commands, one per diagnostic
    #[must_use]
    pub fn to_github(&self, file: &str) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            let level = match diagnostic.severity {
                LintSeverity::Error => "error",
                LintSeverity::Warning => "warning",
            };
            let _ = write!(out, "::{level} file={}", escape_property(file));
            if let Some(position) = diagnostic.location.position {
                let _ = write!(out, ",line={},col={}", position.line, position.column);
            }
            let _ = writeln!(
                out,
                "::{} [{}]",
                escape_data(&diagnostic.message),
                diagnostic.rule
            );
        }
        out
    }
}

type SortKey<'a> = (
    &'a str,
    &'a str,
    &'a str,
    usize,
    &'a str,
    &'a str,
    LintSeverity,
    Option<&'a str>,
    Option<(usize, usize)>,
);

fn sort_key(diagnostic: &LintDiagnostic) -> SortKey<'_> {
    let location = &diagnostic.location;
    (
        location.type_name.as_ref(),
        location.field_name.as_deref().unwrap_or(""),
        location.argument_name.as_deref().unwrap_or(""),
        catalog_index(&diagnostic.rule),
        diagnostic.message.as_str(),
        diagnostic.rule.as_str(),
        diagnostic.severity,
        diagnostic.suggested_fix.as_deref(),
        location.position.map(|p| (p.line, p.column)),
    )
}

/// Escape a workflow command message
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property such as `file=`
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    success: bool,
    verdict: Verdict,
    stats: JsonStats,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonStats {
    errors: usize,
    warnings: usize,
    total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDiagnostic<'a> {
    severity: LintSeverity,
    rule_id: &'a str,
    message: &'a str,
    type_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    argument_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggested_fix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

impl<'a> From<&'a LintDiagnostic> for JsonDiagnostic<'a> {
    fn from(diagnostic: &'a LintDiagnostic) -> Self {
        let location = &diagnostic.location;
        Self {
            severity: diagnostic.severity,
            rule_id: &diagnostic.rule,
            message: &diagnostic.message,
            type_name: location.type_name.as_ref(),
            field_name: location.field_name.as_deref(),
            argument_name: location.argument_name.as_deref(),
            suggested_fix: diagnostic.suggested_fix.as_deref(),
            line: location.position.map(|p| p.line),
            column: location.position.map(|p| p.column),
        }
    }
}
