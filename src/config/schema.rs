// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! A rules table maps rule names to commitlint-style entries:
//! `[severity]`, `[severity, applicability]` or
//! `[severity, applicability, value]`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LintConfig {
    /// Presets applied, in order, before `rules`.
    pub extends: Vec<String>,

    /// Local rule entries, taking precedence over presets.
    pub rules: RuleTable,
}

impl LintConfig {
    /// Resolve presets and local rules into a single table.
    pub fn resolve(&self) -> crate::error::Result<RuleTable> {
        super::loader::resolve_config(self)
    }
}

/// How hard a rule failure is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Rule is not run.
    Disabled = 0,
    /// Failure is reported but does not fail the lint.
    Warning = 1,
    /// Failure fails the lint.
    Error = 2,
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, String> {
        match level {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("severity must be 0, 1 or 2 (got {})", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as u8
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Disabled => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// Whether a rule asserts its condition or its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// True for `never`.
    pub fn is_negated(self) -> bool {
        self == Applicability::Never
    }
}

/// The optional third element of a rule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(usize),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    /// Numeric value, if any.
    pub fn as_number(&self) -> Option<usize> {
        match self {
            RuleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text or list value as a list of strings.
    pub fn as_list(&self) -> Option<Vec<&str>> {
        match self {
            RuleValue::Text(s) => Some(vec![s.as_str()]),
            RuleValue::List(items) => Some(items.iter().map(String::as_str).collect()),
            RuleValue::Number(_) => None,
        }
    }
}

/// One entry of the rules table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRuleConfig", into = "RawRuleConfig")]
pub struct RuleConfig {
    /// Enforcement level.
    pub severity: Severity,
    /// `always` or `never`.
    pub applicability: Applicability,
    /// Rule parameter.
    pub value: Option<RuleValue>,
}

impl RuleConfig {
    /// Create an entry without a value.
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            value: None,
        }
    }

    /// Attach a value.
    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether the linter runs this entry.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }
}

/// Array form used on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawRuleConfig {
    WithValue(Severity, Applicability, RuleValue),
    Full(Severity, Applicability),
    Level((Severity,)),
}

impl From<RawRuleConfig> for RuleConfig {
    fn from(raw: RawRuleConfig) -> Self {
        match raw {
            RawRuleConfig::WithValue(severity, applicability, value) => {
                RuleConfig::new(severity, applicability).with_value(value)
            }
            RawRuleConfig::Full(severity, applicability) => RuleConfig::new(severity, applicability),
            RawRuleConfig::Level((severity,)) => RuleConfig::new(severity, Applicability::Always),
        }
    }
}

impl From<RuleConfig> for RawRuleConfig {
    fn from(config: RuleConfig) -> Self {
        match config.value {
            Some(value) => RawRuleConfig::WithValue(config.severity, config.applicability, value),
            None => RawRuleConfig::Full(config.severity, config.applicability),
        }
    }
}

/// Rule name to entry. Ordered so rules run in a stable order.
pub type RuleTable = BTreeMap<String, RuleConfig>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        rule: RuleConfig,
    }

    #[test]
    fn test_rule_config_forms() {
        let full: Wrapper = toml::from_str(r#"rule = [2, "always", 150]"#).unwrap();
        assert_eq!(full.rule.severity, Severity::Error);
        assert_eq!(full.rule.value, Some(RuleValue::Number(150)));

        let pair: Wrapper = toml::from_str(r#"rule = [1, "never"]"#).unwrap();
        assert_eq!(pair.rule.severity, Severity::Warning);
        assert_eq!(pair.rule.applicability, Applicability::Never);
        assert!(pair.rule.value.is_none());

        let level: Wrapper = toml::from_str("rule = [0]").unwrap();
        assert!(!level.rule.is_enabled());
        assert_eq!(level.rule.applicability, Applicability::Always);
    }

    #[test]
    fn test_rule_config_list_value() {
        let parsed: Wrapper = toml::from_str(r#"rule = [2, "always", ["feat", "fix"]]"#).unwrap();
        let value = parsed.rule.value.unwrap();
        assert_eq!(value.as_list(), Some(vec!["feat", "fix"]));
        assert_eq!(value.as_number(), None);
    }

    #[test]
    fn test_invalid_severity() {
        let parsed: Result<Wrapper, _> = toml::from_str(r#"rule = [3, "always"]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_rule_config_serialization() {
        let wrapper = Wrapper {
            rule: RuleConfig::new(Severity::Error, Applicability::Always)
                .with_value(RuleValue::Number(150)),
        };
        let toml_str = toml::to_string(&wrapper).unwrap();
        assert!(toml_str.contains("150"));
        assert!(toml_str.contains("always"));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
