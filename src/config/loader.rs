// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration parsing, preset resolution and merging.

use crate::error::{ConfigError, Result};

use super::default::{conventional_preset, CONVENTIONAL_PRESET};
use super::schema::{LintConfig, RuleTable};

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    toml::from_str(content).map_err(|e| {
        ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        }
        .into()
    })
}

/// Look up a preset table by name.
pub fn preset(name: &str) -> Result<RuleTable> {
    match name {
        CONVENTIONAL_PRESET | "@commitlint/config-conventional" => Ok(conventional_preset()),
        _ => Err(ConfigError::UnknownPreset {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Merge two tables, entries in the overlay replacing whole entries in the base.
pub fn merge_tables(base: RuleTable, overlay: RuleTable) -> RuleTable {
    let mut merged = base;
    merged.extend(overlay);
    merged
}

/// Apply the presets a config extends, then its own rules.
pub fn resolve_config(config: &LintConfig) -> Result<RuleTable> {
    let mut table = RuleTable::new();

    for name in &config.extends {
        tracing::debug!("Applying preset: {}", name);
        table = merge_tables(table, preset(name)?);
    }

    let table = merge_tables(table, config.rules.clone());
    tracing::debug!("Resolved {} rule entries", table.len());

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Applicability, RuleValue, Severity};
    use crate::error::LintError;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert!(config.extends.is_empty());
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
"header-regex" = [1, "always"]
"type-enum" = [2, "always", ["feat", "fix"]]
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules["header-regex"].severity, Severity::Warning);
        assert_eq!(
            config.rules["type-enum"].value,
            Some(RuleValue::List(vec!["feat".to_string(), "fix".to_string()]))
        );
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = parse_config("[rules]\n\"header-regex\" = \"error\"\n");
        assert!(matches!(
            result,
            Err(LintError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_resolve_overrides_preset() {
        let config = crate::config::default_config();
        let table = config.resolve().unwrap();

        assert_eq!(
            table["header-max-length"].value,
            Some(RuleValue::Number(150))
        );
        assert!(table.contains_key("header-regex"));
        assert!(table.contains_key("type-enum"));
        assert_eq!(table["subject-empty"].applicability, Applicability::Never);
    }

    #[test]
    fn test_resolve_unknown_preset() {
        let config = parse_config("extends = [\"angular\"]").unwrap();
        assert!(matches!(
            config.resolve(),
            Err(LintError::Config(ConfigError::UnknownPreset { .. }))
        ));
    }

    #[test]
    fn test_resolve_disable_rule() {
        let toml = r#"
extends = ["conventional"]

[rules]
"body-leading-blank" = [0]
"#;
        let table = parse_config(toml).unwrap().resolve().unwrap();
        assert!(!table["body-leading-blank"].is_enabled());
    }
}
