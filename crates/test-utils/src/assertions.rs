//! Snapshot testing assertions for lint output
//!
//! Findings are formatted consistently so snapshots stay readable and
//! independent of the diagnostic types of any one crate.

/// Format `(rule, message)` pairs for snapshot testing.
///
/// # Example
///
/// ```ignore
/// use graphql_style_test_utils::assertions::format_findings;
///
/// let report = Linter::default().report(&table);
/// insta::assert_snapshot!(format_findings(
///     report.diagnostics().iter().map(|d| (&d.rule, &d.message))
/// ));
/// ```
#[must_use]
pub fn format_findings<R, M>(findings: impl IntoIterator<Item = (R, M)>) -> String
where
    R: AsRef<str>,
    M: AsRef<str>,
{
    let lines: Vec<String> = findings
        .into_iter()
        .enumerate()
        .map(|(i, (rule, message))| format!("[{}] {}: {}", i + 1, rule.as_ref(), message.as_ref()))
        .collect();

    if lines.is_empty() {
        return String::from("(no diagnostics)");
    }
    lines.join("\n")
}

/// Format diagnostics with their messages only (without rule ids).
/// Useful when you only care about the messages.
#[must_use]
pub fn format_diagnostic_messages<T: AsRef<str>>(messages: &[T]) -> String {
    if messages.is_empty() {
        return String::from("(no diagnostics)");
    }

    messages
        .iter()
        .enumerate()
        .map(|(i, m)| format!("[{}] {}", i + 1, m.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// How many findings a given rule produced
#[must_use]
pub fn count_rule<'a>(rules: impl IntoIterator<Item = &'a str>, rule: &str) -> usize {
    rules.into_iter().filter(|r| *r == rule).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_findings_empty() {
        let empty: Vec<(&str, &str)> = vec![];
        assert_eq!(format_findings(empty), "(no diagnostics)");
    }

    #[test]
    fn test_format_findings() {
        let formatted = format_findings([
            ("type_casing", "Type 'user' should be PascalCase"),
            ("field_casing", "Field 'User.First' should be camelCase"),
        ]);
        assert_eq!(
            formatted,
            "[1] type_casing: Type 'user' should be PascalCase\n[2] field_casing: Field 'User.First' should be camelCase"
        );
    }

    #[test]
    fn test_format_diagnostic_messages() {
        let messages = vec!["Error 1", "Error 2"];
        let formatted = format_diagnostic_messages(&messages);
        assert_eq!(formatted, "[1] Error 1\n[2] Error 2");
    }

    #[test]
    fn test_count_rule() {
        let rules = ["type_casing", "field_casing", "type_casing"];
        assert_eq!(count_rule(rules, "type_casing"), 2);
        assert_eq!(count_rule(rules, "boolean_prefix"), 0);
    }
}
