// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint report types.

use crate::config::Severity;
use console::{style, Style};

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintProblem {
    /// Rule name.
    pub name: String,
    /// Severity the rule was configured with.
    pub level: Severity,
    /// Human-readable message.
    pub message: String,
}

impl LintProblem {
    /// Whether this problem fails the lint.
    pub fn is_error(&self) -> bool {
        self.level == Severity::Error
    }

    /// Format the problem for terminal output.
    pub fn format(&self) -> String {
        let (prefix, name_style) = if self.is_error() {
            (style("✗").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        // Continuation lines of multi-line messages line up under the first.
        let message = self.message.replace('\n', "\n    ");

        format!(
            "{} {} [{}]",
            prefix,
            message,
            name_style.apply_to(&self.name)
        )
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The linted message.
    pub input: String,
    /// Failures from rules at error level.
    pub errors: Vec<LintProblem>,
    /// Failures from rules at warning level.
    pub warnings: Vec<LintProblem>,
}

impl LintReport {
    /// Create an empty report.
    pub fn new(input: String) -> Self {
        Self {
            input,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the lint passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit status a hook should use.
    pub fn exit_code(&self) -> i32 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }

    /// Get the total number of problems.
    pub fn problem_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Render the report in the given format.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
            }
            OutputFormat::Text => self.format_text(),
        }
    }

    /// Render in text format.
    pub fn format_text(&self) -> String {
        let mut lines = Vec::new();

        let first_line = self.input.lines().next().unwrap_or("");
        lines.push(format!("{} input: {}", style("⧗").dim(), first_line));

        for problem in self.errors.iter().chain(&self.warnings) {
            lines.push(problem.format());
        }

        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        lines.push(format!("{} {}", status, self.summary()));

        lines.join("\n")
    }

    /// Render as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        let problem = |p: &LintProblem| {
            serde_json::json!({
                "name": p.name,
                "level": u8::from(p.level),
                "message": p.message,
            })
        };

        serde_json::json!({
            "valid": self.is_valid(),
            "input": self.input,
            "errors": self.errors.iter().map(problem).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(problem).collect::<Vec<_>>(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!(
            "found {} problems, {} warnings",
            self.errors.len(),
            self.warnings.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(name: &str, level: Severity) -> LintProblem {
        LintProblem {
            name: name.to_string(),
            level,
            message: format!("{} failed", name),
        }
    }

    #[test]
    fn test_report_valid() {
        let report = LintReport::new("feat: a / b".to_string());
        assert!(report.is_valid());
        assert_eq!(report.problem_count(), 0);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_report_with_errors() {
        let mut report = LintReport::new("bad".to_string());
        report.errors.push(problem("header-regex", Severity::Error));

        assert!(!report.is_valid());
        assert_eq!(report.problem_count(), 1);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_warnings_keep_report_valid() {
        let mut report = LintReport::new("feat: a / b".to_string());
        report
            .warnings
            .push(problem("body-leading-blank", Severity::Warning));
        assert!(report.is_valid());
        assert_eq!(report.summary(), "found 0 problems, 1 warnings");
    }

    #[test]
    fn test_problem_format() {
        let formatted = problem("header-regex", Severity::Error).format();
        assert!(formatted.contains("header-regex"));
        assert!(formatted.contains("header-regex failed"));
    }

    #[test]
    fn test_format_text() {
        let mut report = LintReport::new("feat: a\n\nbody".to_string());
        report.errors.push(problem("header-regex", Severity::Error));

        let text = report.render(OutputFormat::Text);
        assert!(text.contains("feat: a"));
        assert!(!text.contains("body"));
        assert!(text.contains("found 1 problems, 0 warnings"));
    }

    #[test]
    fn test_to_json() {
        let mut report = LintReport::new("feat: a".to_string());
        report.errors.push(problem("header-regex", Severity::Error));
        report
            .warnings
            .push(problem("body-leading-blank", Severity::Warning));

        let json = report.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["name"], "header-regex");
        assert_eq!(json["errors"][0]["level"], 2);
        assert_eq!(json["warnings"][0]["level"], 1);

        let rendered = report.render(OutputFormat::Json);
        assert!(rendered.contains("\"valid\": false"));
    }
}
