use crate::diagnostics::LintSeverity;
use crate::traits::LintRule;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Configured severity level for a lint rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Off,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl RuleSeverity {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "off" => Some(Self::Off),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// The diagnostic severity this level produces, `None` when off
    #[must_use]
    pub const fn to_diagnostic(self) -> Option<LintSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(LintSeverity::Warning),
            Self::Error => Some(LintSeverity::Error),
        }
    }
}

/// Configuration for a single lint rule
///
/// Supports multiple formats:
/// ```yaml
/// # Simple severity
/// rule_name: warn
///
/// # Object style with options
/// rule_name:
///   severity: warn
///   options:
///     suffix: Input
///
/// # ESLint-style array: [severity, options]
/// rule_name: [warn, { suffix: Input }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LintRuleConfig {
    /// Just a severity level (simple case)
    Severity(RuleSeverity),

    /// Detailed config with options; a missing severity keeps the rule default
    Detailed {
        #[serde(skip_serializing_if = "Option::is_none")]
        severity: Option<RuleSeverity>,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<serde_json::Value>,
    },
}

impl LintRuleConfig {
    #[must_use]
    pub const fn severity(&self) -> Option<RuleSeverity> {
        match self {
            Self::Severity(s) => Some(*s),
            Self::Detailed { severity, .. } => *severity,
        }
    }

    #[must_use]
    pub const fn options(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Severity(_) => None,
            Self::Detailed { options, .. } => options.as_ref(),
        }
    }
}

/// Custom deserializer for `LintRuleConfig` to handle ESLint-style array syntax
impl<'de> Deserialize<'de> for LintRuleConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, SeqAccess, Visitor};

        struct LintRuleConfigVisitor;

        impl<'de> Visitor<'de> for LintRuleConfigVisitor {
            type Value = LintRuleConfig;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str(
                    "a severity string ('off', 'warn', 'error'), \
                     an array [severity, options], \
                     or an object { severity, options }",
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                RuleSeverity::parse(value)
                    .map(LintRuleConfig::Severity)
                    .ok_or_else(|| E::custom(format!("unknown severity: {value}")))
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                // YAML 1.1 parsers read a bare `off` as false
                if value {
                    Err(E::custom("expected a severity, found `true`"))
                } else {
                    Ok(LintRuleConfig::Severity(RuleSeverity::Off))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // ESLint-style: [severity, options]
                let severity: RuleSeverity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &"array with severity"))?;

                let options: Option<serde_json::Value> = seq.next_element()?;

                Ok(LintRuleConfig::Detailed {
                    severity: Some(severity),
                    options,
                })
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                #[derive(Deserialize)]
                #[serde(deny_unknown_fields)]
                struct DetailedConfig {
                    #[serde(default)]
                    severity: Option<RuleSeverity>,
                    #[serde(default)]
                    options: Option<serde_json::Value>,
                }

                let config =
                    DetailedConfig::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(LintRuleConfig::Detailed {
                    severity: config.severity,
                    options: config.options,
                })
            }
        }

        deserializer.deserialize_any(LintRuleConfigVisitor)
    }
}

/// Style configuration for one deployment
///
/// ```yaml
/// allowedMutationVerbs: [create, update, delete, set, track]
/// entityNameAllowList: [dateOfBirth]
/// disabledRules: [type_singular]
/// severityOverrides:
///   field_plurality: error
/// rules:
///   input_suffix: [error, { suffix: Input }]
///   boolean_prefix: { severity: warn, options: { mode: require } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StyleConfig {
    /// First words a root mutation field may start with
    pub allowed_mutation_verbs: Vec<String>,

    /// Compound field names exempt from `field_redundant_name`
    pub entity_name_allow_list: BTreeSet<String>,

    pub disabled_rules: BTreeSet<String>,

    pub severity_overrides: BTreeMap<String, RuleSeverity>,

    /// Per-rule severity and options
    pub rules: BTreeMap<String, LintRuleConfig>,
}

pub const DEFAULT_MUTATION_VERBS: &[&str] = &["create", "update", "delete", "set", "track"];

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            allowed_mutation_verbs: DEFAULT_MUTATION_VERBS
                .iter()
                .map(ToString::to_string)
                .collect(),
            entity_name_allow_list: BTreeSet::from(["dateOfBirth".to_string()]),
            disabled_rules: BTreeSet::new(),
            severity_overrides: BTreeMap::new(),
            rules: BTreeMap::new(),
        }
    }
}

impl StyleConfig {
    /// Validate the configuration against available rules
    ///
    /// Returns an error if any referenced rule id is unknown. The error
    /// message includes a suggestion and the list of valid rule ids.
    pub fn validate(&self) -> Result<(), String> {
        use std::fmt::Write;

        let valid_rules = crate::registry::all_rule_names();

        let referenced = self
            .disabled_rules
            .iter()
            .chain(self.severity_overrides.keys())
            .chain(self.rules.keys());

        let mut invalid_rules: Vec<&str> = referenced
            .map(String::as_str)
            .filter(|rule| !valid_rules.iter().any(|valid| valid == rule))
            .collect();
        invalid_rules.sort_unstable();
        invalid_rules.dedup();

        if invalid_rules.is_empty() {
            return self.validate_rule_options();
        }

        let mut error = format!("Invalid lint rule name(s): {}\n", invalid_rules.join(", "));
        for rule in &invalid_rules {
            if let Some(suggestion) = closest_rule_name(rule, &valid_rules) {
                let _ = writeln!(error, "  '{rule}': did you mean '{suggestion}'?");
            }
        }
        error.push_str("\nValid rule names are:\n");
        for rule in &valid_rules {
            let _ = writeln!(error, "  - {rule}");
        }
        Err(error)
    }

    /// Check each configured rule's options against the options it accepts
    fn validate_rule_options(&self) -> Result<(), String> {
        let problems: Vec<String> = crate::registry::all_rules()
            .iter()
            .filter_map(|rule| {
                let options = self.rule_options(rule.name())?;
                rule.validate_options(options)
                    .err()
                    .map(|message| format!("  '{}': {message}", rule.name()))
            })
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(format!("Invalid lint rule options:\n{}", problems.join("\n")))
        }
    }

    /// Resolve the effective severity of a rule
    ///
    /// `disabledRules` wins, then `severityOverrides`, then `rules`, then the
    /// rule's own default. `None` means the rule does not run.
    #[must_use]
    pub fn resolve_severity<R: LintRule + ?Sized>(&self, rule: &R) -> Option<LintSeverity> {
        let name = rule.name();
        if self.disabled_rules.contains(name) {
            return None;
        }

        let configured = self
            .severity_overrides
            .get(name)
            .copied()
            .or_else(|| self.rules.get(name).and_then(LintRuleConfig::severity));

        match configured {
            Some(level) => level.to_diagnostic(),
            None if rule.enabled_by_default() => Some(rule.default_severity()),
            None => None,
        }
    }

    /// Get the options for a rule (if configured)
    #[must_use]
    pub fn rule_options(&self, rule_name: &str) -> Option<&serde_json::Value> {
        self.rules.get(rule_name).and_then(LintRuleConfig::options)
    }

    #[must_use]
    pub fn is_allowed_mutation_verb(&self, verb: &str) -> bool {
        self.allowed_mutation_verbs.iter().any(|v| v == verb)
    }
}

/// Closest valid rule name by edit distance, if reasonably close
fn closest_rule_name<'a>(name: &str, valid: &[&'a str]) -> Option<&'a str> {
    valid
        .iter()
        .map(|candidate| (strsim::levenshtein(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}
