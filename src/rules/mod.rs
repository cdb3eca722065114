// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message rules.
//!
//! Every rule is a pure predicate over a parsed [`Commit`]. Rules are looked
//! up by name from a static registry; there is no runtime registration.

pub mod bilingual;
pub mod builtin;

use crate::commit::Commit;
use crate::config::{Applicability, RuleValue};

pub use bilingual::{BilingualViolation, BodyNoMultiHeader, HeaderRegex};

/// Outcome of running one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleVerdict {
    /// Whether the commit satisfied the rule.
    pub passed: bool,
    /// Explanation, present only on failure.
    pub message: Option<String>,
}

impl RuleVerdict {
    /// A passing verdict.
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: None,
        }
    }

    /// A failing verdict.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
        }
    }

    /// Pass when `passed`, otherwise fail with the lazily built message.
    pub fn check(passed: bool, message: impl FnOnce() -> String) -> Self {
        if passed {
            Self::pass()
        } else {
            Self::fail(message())
        }
    }
}

/// A named commit message rule.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Get the rule name.
    fn name(&self) -> &'static str;

    /// Check the commit.
    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict;

    /// Check that a configured value suits this rule.
    fn validate_value(&self, _value: Option<&RuleValue>) -> Result<(), String> {
        Ok(())
    }
}

static RULES: &[&dyn Rule] = &[
    &HeaderRegex,
    &BodyNoMultiHeader,
    &builtin::BodyLeadingBlank,
    &builtin::BodyMaxLineLength,
    &builtin::FooterLeadingBlank,
    &builtin::FooterMaxLineLength,
    &builtin::HeaderMaxLength,
    &builtin::HeaderTrim,
    &builtin::SubjectCase,
    &builtin::SubjectEmpty,
    &builtin::SubjectFullStop,
    &builtin::TypeCase,
    &builtin::TypeEmpty,
    &builtin::TypeEnum,
];

/// Find a rule by name.
pub fn lookup(name: &str) -> Option<&'static dyn Rule> {
    RULES.iter().copied().find(|rule| rule.name() == name)
}

/// Names of all known rules.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|rule| rule.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("header-regex").unwrap().name(), "header-regex");
        assert_eq!(
            lookup("body-no-multi-header").unwrap().name(),
            "body-no-multi-header"
        );
        assert!(lookup("header-max-length").is_some());
        assert!(lookup("subject-case").is_some());
        assert!(lookup("footer-leading-blank").is_some());
        assert!(lookup("footer-max-line-length").is_some());
        assert!(lookup("no-such-rule").is_none());
    }

    #[test]
    fn test_rule_names_unique() {
        let mut names: Vec<_> = rule_names().collect();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_verdict_check() {
        assert_eq!(RuleVerdict::check(true, || "unused".to_string()), RuleVerdict::pass());
        let failed = RuleVerdict::check(false, || "bad".to_string());
        assert!(!failed.passed);
        assert_eq!(failed.message.as_deref(), Some("bad"));
    }
}
