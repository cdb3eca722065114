// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and presets.

use super::schema::{Applicability, LintConfig, RuleConfig, RuleTable, RuleValue, Severity};

/// Name of the conventional-commits preset.
pub const CONVENTIONAL_PRESET: &str = "conventional";

/// Maximum header length for bilingual headers.
pub const HEADER_MAX_LENGTH: usize = 150;

/// Subject cases the conventional preset forbids.
pub const FORBIDDEN_SUBJECT_CASES: &[&str] =
    &["sentence-case", "start-case", "pascal-case", "upper-case"];

/// Commit types accepted by the conventional preset.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

fn entry(severity: Severity, applicability: Applicability) -> RuleConfig {
    RuleConfig::new(severity, applicability)
}

/// The rules the conventional preset turns on.
pub fn conventional_preset() -> RuleTable {
    use Applicability::{Always, Never};
    use Severity::{Error, Warning};

    let types = CONVENTIONAL_TYPES.iter().map(|t| t.to_string()).collect();
    let subject_cases = FORBIDDEN_SUBJECT_CASES
        .iter()
        .map(|c| c.to_string())
        .collect();

    [
        ("body-leading-blank", entry(Warning, Always)),
        (
            "body-max-line-length",
            entry(Error, Always).with_value(RuleValue::Number(100)),
        ),
        ("footer-leading-blank", entry(Warning, Always)),
        (
            "footer-max-line-length",
            entry(Error, Always).with_value(RuleValue::Number(100)),
        ),
        (
            "header-max-length",
            entry(Error, Always).with_value(RuleValue::Number(100)),
        ),
        ("header-trim", entry(Error, Always)),
        (
            "subject-case",
            entry(Error, Never).with_value(RuleValue::List(subject_cases)),
        ),
        ("subject-empty", entry(Error, Never)),
        (
            "subject-full-stop",
            entry(Error, Never).with_value(RuleValue::Text(".".to_string())),
        ),
        (
            "type-case",
            entry(Error, Always).with_value(RuleValue::Text("lower-case".to_string())),
        ),
        ("type-empty", entry(Error, Never)),
        ("type-enum", entry(Error, Always).with_value(RuleValue::List(types))),
    ]
    .into_iter()
    .map(|(name, config)| (name.to_string(), config))
    .collect()
}

/// The bilingual rules layered on top of the preset.
pub fn bilingual_rules() -> RuleTable {
    [
        (
            "header-regex",
            entry(Severity::Error, Applicability::Always),
        ),
        (
            "body-no-multi-header",
            entry(Severity::Error, Applicability::Always),
        ),
        (
            "header-max-length",
            entry(Severity::Error, Applicability::Always)
                .with_value(RuleValue::Number(HEADER_MAX_LENGTH)),
        ),
    ]
    .into_iter()
    .map(|(name, config)| (name.to_string(), config))
    .collect()
}

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig {
        extends: vec![CONVENTIONAL_PRESET.to_string()],
        rules: bilingual_rules(),
    }
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# Bilingual commitlint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Base presets, applied in order
extends = ["conventional"]

# Entries are [severity, applicability, value]
# severity: 0 = off, 1 = warning, 2 = error
[rules]
"header-regex" = [2, "always"]
"body-no-multi-header" = [2, "always"]
"header-max-length" = [2, "always", 150]
"#
}
