// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Linter that runs a rules table over commit messages.

use crate::commit::Commit;
use crate::config::{LintConfig, RuleConfig, RuleTable, Severity};
use crate::error::{ConfigError, Result};
use crate::rules::{self, Rule};

use super::report::{LintProblem, LintReport};

/// Linter for commit messages.
#[derive(Debug, Clone)]
pub struct Linter {
    entries: Vec<(&'static dyn Rule, RuleConfig)>,
}

impl Linter {
    /// Create a linter for a resolved rules table.
    ///
    /// Fails if an enabled entry names an unknown rule or carries a value
    /// the rule cannot use.
    pub fn new(table: RuleTable) -> Result<Self> {
        let mut entries = Vec::new();

        for (name, config) in table {
            if !config.is_enabled() {
                tracing::debug!("Rule {} is disabled", name);
                continue;
            }

            let rule = rules::lookup(&name).ok_or_else(|| ConfigError::UnknownRule {
                name: name.clone(),
            })?;

            rule.validate_value(config.value.as_ref())
                .map_err(|message| ConfigError::InvalidValue {
                    key: name.clone(),
                    message,
                })?;

            entries.push((rule, config));
        }

        tracing::debug!("Linter ready with {} rules", entries.len());
        Ok(Self { entries })
    }

    /// Create a linter from a configuration, resolving its presets.
    pub fn from_config(config: &LintConfig) -> Result<Self> {
        Self::new(config.resolve()?)
    }

    /// Names of the rules this linter runs, in order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(rule, _)| rule.name())
    }

    /// Lint a parsed commit.
    pub fn lint_commit(&self, commit: &Commit) -> LintReport {
        let mut report = LintReport::new(commit.raw.clone());

        for (rule, config) in &self.entries {
            let verdict = rule.check(commit, config.applicability, config.value.as_ref());
            tracing::trace!("{}: passed={}", rule.name(), verdict.passed);

            if verdict.passed {
                continue;
            }

            let problem = LintProblem {
                name: rule.name().to_string(),
                level: config.severity,
                message: verdict.message.unwrap_or_default(),
            };

            match config.severity {
                Severity::Error => report.errors.push(problem),
                Severity::Warning => report.warnings.push(problem),
                Severity::Disabled => {}
            }
        }

        report
    }

    /// Lint a commit message string.
    pub fn lint(&self, message: &str) -> Result<LintReport> {
        let commit = Commit::parse(message)?;
        Ok(self.lint_commit(&commit))
    }
}
