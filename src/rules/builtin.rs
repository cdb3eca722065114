// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in conventional-commit rules.
//!
//! Rules that take `never` invert their condition; the rest ignore it.

use crate::commit::Commit;
use crate::config::{Applicability, RuleValue};
use lazy_static::lazy_static;
use regex::Regex;

use super::{Rule, RuleVerdict};

lazy_static! {
    /// Quoted spans, usually proper names, left out of case checks.
    static ref QUOTED_REGEX: Regex = Regex::new(r#"`.*?`|".*?"|'.*?'"#).unwrap();
}

/// Case names understood by `type-case` and `subject-case`.
const SUPPORTED_CASES: &[&str] = &[
    "lower-case",
    "upper-case",
    "sentence-case",
    "start-case",
    "pascal-case",
];

fn require_number(value: Option<&RuleValue>) -> Result<(), String> {
    match value.and_then(RuleValue::as_number) {
        Some(_) => Ok(()),
        None => Err("expected a number".to_string()),
    }
}

fn require_text(value: Option<&RuleValue>) -> Result<(), String> {
    match value.and_then(RuleValue::as_text) {
        Some(_) => Ok(()),
        None => Err("expected a string".to_string()),
    }
}

fn require_list(value: Option<&RuleValue>) -> Result<(), String> {
    match value.and_then(RuleValue::as_list) {
        Some(_) => Ok(()),
        None => Err("expected a string or a list of strings".to_string()),
    }
}

fn must(negated: bool) -> &'static str {
    if negated {
        "may not"
    } else {
        "must"
    }
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split on punctuation, whitespace and lower-to-upper boundaries.
fn words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in text.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if prev_lower && c.is_uppercase() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn to_case(text: &str, case: &str) -> String {
    match case {
        "lower-case" => text.to_lowercase(),
        "upper-case" => text.to_uppercase(),
        "sentence-case" => upper_first(text),
        "start-case" => words(text)
            .iter()
            .map(|word| upper_first(word))
            .collect::<Vec<_>>()
            .join(" "),
        "pascal-case" => words(text)
            .iter()
            .map(|word| upper_first(&word.to_lowercase()))
            .collect(),
        _ => String::new(),
    }
}

/// Whether `text` is already written in `case`.
///
/// Quoted spans are ignored. Text that converts to nothing, or to something
/// starting with a digit, counts as matching.
fn is_case(text: &str, case: &str) -> bool {
    if !SUPPORTED_CASES.contains(&case) {
        return false;
    }

    let text = QUOTED_REGEX.replace_all(text, "");
    let text = text.trim();
    let converted = to_case(text, case);

    if converted.is_empty() || converted.starts_with(|c: char| c.is_ascii_digit()) {
        return true;
    }
    converted == text
}

fn validate_cases(value: Option<&RuleValue>) -> Result<(), String> {
    require_list(value)?;
    let cases = value.and_then(RuleValue::as_list).unwrap_or_default();
    match cases.iter().find(|case| !SUPPORTED_CASES.contains(*case)) {
        Some(case) => Err(format!(
            "unsupported case '{}' (use one of: {})",
            case,
            SUPPORTED_CASES.join(", ")
        )),
        None => Ok(()),
    }
}

/// `header-max-length`: header is at most N characters.
#[derive(Debug, Clone, Copy)]
pub struct HeaderMaxLength;

impl Rule for HeaderMaxLength {
    fn name(&self) -> &'static str {
        "header-max-length"
    }

    fn check(
        &self,
        commit: &Commit,
        _when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let max = value.and_then(RuleValue::as_number).unwrap_or(usize::MAX);
        let len = commit.header_len();

        RuleVerdict::check(len <= max, || {
            format!(
                "header must not be longer than {} characters, current length is {}",
                max, len
            )
        })
    }

    fn validate_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        require_number(value)
    }
}

/// `header-trim`: no whitespace around the header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderTrim;

impl Rule for HeaderTrim {
    fn name(&self) -> &'static str {
        "header-trim"
    }

    fn check(
        &self,
        commit: &Commit,
        _when: Applicability,
        _value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let header = commit.header.as_str();
        let starts = header.trim_start() != header;
        let ends = header.trim_end() != header;

        match (starts, ends) {
            (false, false) => RuleVerdict::pass(),
            (true, true) => RuleVerdict::fail("header must not be surrounded by whitespace"),
            (true, false) => RuleVerdict::fail("header must not start with whitespace"),
            (false, true) => RuleVerdict::fail("header must not end with whitespace"),
        }
    }
}

/// `type-enum`: type is one of the listed types.
#[derive(Debug, Clone, Copy)]
pub struct TypeEnum;

impl Rule for TypeEnum {
    fn name(&self) -> &'static str {
        "type-enum"
    }

    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let commit_type = match commit.commit_type.as_deref() {
            Some(t) => t,
            None => return RuleVerdict::pass(),
        };
        let allowed = value.and_then(RuleValue::as_list).unwrap_or_default();
        let negated = when.is_negated();
        let listed = allowed.contains(&commit_type);

        RuleVerdict::check(listed != negated, || {
            format!(
                "type must {}be one of [{}]",
                if negated { "not " } else { "" },
                allowed.join(", ")
            )
        })
    }

    fn validate_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        require_list(value)
    }
}

/// `type-case`: type is written in the given case.
#[derive(Debug, Clone, Copy)]
pub struct TypeCase;

impl Rule for TypeCase {
    fn name(&self) -> &'static str {
        "type-case"
    }

    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let commit_type = match commit.commit_type.as_deref() {
            Some(t) => t,
            None => return RuleVerdict::pass(),
        };
        let cases = value.and_then(RuleValue::as_list).unwrap_or_default();
        let negated = when.is_negated();
        let matches = cases.iter().any(|case| is_case(commit_type, case));

        RuleVerdict::check(matches != negated, || {
            format!(
                "type must {}be {}",
                if negated { "not " } else { "" },
                cases.join(" or ")
            )
        })
    }

    fn validate_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        validate_cases(value)
    }
}

/// `subject-case`: subject is (or, under `never`, is not) in one of the cases.
#[derive(Debug, Clone, Copy)]
pub struct SubjectCase;

impl Rule for SubjectCase {
    fn name(&self) -> &'static str {
        "subject-case"
    }

    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let subject = match commit.subject.as_deref() {
            Some(s) => s,
            None => return RuleVerdict::pass(),
        };
        let cases = value.and_then(RuleValue::as_list).unwrap_or_default();
        let negated = when.is_negated();
        let matches = cases.iter().any(|case| is_case(subject, case));

        RuleVerdict::check(matches != negated, || {
            format!(
                "subject must {}be {}",
                if negated { "not " } else { "" },
                cases.join(", ")
            )
        })
    }

    fn validate_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        validate_cases(value)
    }
}

/// `type-empty`: type presence.
#[derive(Debug, Clone, Copy)]
pub struct TypeEmpty;

impl Rule for TypeEmpty {
    fn name(&self) -> &'static str {
        "type-empty"
    }

    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        _value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let negated = when.is_negated();
        let empty = commit.commit_type.is_none();

        RuleVerdict::check(empty != negated, || format!("type {} be empty", must(negated)))
    }
}

/// `subject-empty`: subject presence.
#[derive(Debug, Clone, Copy)]
pub struct SubjectEmpty;

impl Rule for SubjectEmpty {
    fn name(&self) -> &'static str {
        "subject-empty"
    }

    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        _value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let negated = when.is_negated();
        let empty = commit.subject.is_none();

        RuleVerdict::check(empty != negated, || {
            format!("subject {} be empty", must(negated))
        })
    }
}

/// `subject-full-stop`: subject ends with the given stop.
#[derive(Debug, Clone, Copy)]
pub struct SubjectFullStop;

impl Rule for SubjectFullStop {
    fn name(&self) -> &'static str {
        "subject-full-stop"
    }

    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let subject = match commit.subject.as_deref() {
            Some(s) => s,
            None => return RuleVerdict::pass(),
        };
        let stop = value.and_then(RuleValue::as_text).unwrap_or(".");
        let negated = when.is_negated();
        let has_stop = subject.ends_with(stop);

        RuleVerdict::check(has_stop != negated, || {
            format!("subject {} end with full stop", must(negated))
        })
    }

    fn validate_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        require_text(value)
    }
}

/// `body-leading-blank`: a blank line separates header and body.
#[derive(Debug, Clone, Copy)]
pub struct BodyLeadingBlank;

impl Rule for BodyLeadingBlank {
    fn name(&self) -> &'static str {
        "body-leading-blank"
    }

    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        _value: Option<&RuleValue>,
    ) -> RuleVerdict {
        if commit.body.is_none() {
            return RuleVerdict::pass();
        }
        let negated = when.is_negated();
        let blank = commit
            .raw
            .split('\n')
            .nth(1)
            .map(|line| line.trim_end_matches('\r').is_empty())
            .unwrap_or(false);

        RuleVerdict::check(blank != negated, || {
            format!("body {} have leading blank line", must(negated))
        })
    }
}

/// `body-max-line-length`: every body line is at most N characters.
#[derive(Debug, Clone, Copy)]
pub struct BodyMaxLineLength;

impl Rule for BodyMaxLineLength {
    fn name(&self) -> &'static str {
        "body-max-line-length"
    }

    fn check(
        &self,
        commit: &Commit,
        _when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let body = match commit.body.as_deref() {
            Some(b) => b,
            None => return RuleVerdict::pass(),
        };
        let max = value.and_then(RuleValue::as_number).unwrap_or(usize::MAX);
        let fits = body.lines().all(|line| line.chars().count() <= max);

        RuleVerdict::check(fits, || {
            format!("body's lines must not be longer than {} characters", max)
        })
    }

    fn validate_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        require_number(value)
    }
}

/// `footer-leading-blank`: a blank line separates the footer from what precedes it.
#[derive(Debug, Clone, Copy)]
pub struct FooterLeadingBlank;

impl Rule for FooterLeadingBlank {
    fn name(&self) -> &'static str {
        "footer-leading-blank"
    }

    fn check(
        &self,
        commit: &Commit,
        when: Applicability,
        _value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let start = match commit.footer_start_line() {
            Some(index) => index,
            None => return RuleVerdict::pass(),
        };
        let negated = when.is_negated();
        let blank = commit
            .raw
            .split('\n')
            .nth(start - 1)
            .map(|line| line.trim_end_matches('\r').is_empty())
            .unwrap_or(false);

        RuleVerdict::check(blank != negated, || {
            format!("footer {} have leading blank line", must(negated))
        })
    }
}

/// `footer-max-line-length`: every footer line is at most N characters.
#[derive(Debug, Clone, Copy)]
pub struct FooterMaxLineLength;

impl Rule for FooterMaxLineLength {
    fn name(&self) -> &'static str {
        "footer-max-line-length"
    }

    fn check(
        &self,
        commit: &Commit,
        _when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleVerdict {
        let footer = match commit.footer.as_deref() {
            Some(f) => f,
            None => return RuleVerdict::pass(),
        };
        let max = value.and_then(RuleValue::as_number).unwrap_or(usize::MAX);
        let fits = footer.lines().all(|line| line.chars().count() <= max);

        RuleVerdict::check(fits, || {
            format!("footer's lines must not be longer than {} characters", max)
        })
    }

    fn validate_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        require_number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Applicability::{Always, Never};

    fn run(
        rule: &dyn Rule,
        message: &str,
        when: Applicability,
        value: Option<RuleValue>,
    ) -> RuleVerdict {
        let commit = Commit::parse(message).unwrap();
        rule.check(&commit, when, value.as_ref())
    }

    fn text(s: &str) -> Option<RuleValue> {
        Some(RuleValue::Text(s.to_string()))
    }

    #[test]
    fn test_header_max_length() {
        let long = format!("feat: {} / 長い", "a".repeat(150));
        let verdict = run(&HeaderMaxLength, &long, Always, Some(RuleValue::Number(150)));
        assert!(!verdict.passed);
        assert!(verdict.message.unwrap().contains("150"));

        let short = "feat: add login / ログイン機能を追加";
        assert!(run(&HeaderMaxLength, short, Always, Some(RuleValue::Number(150))).passed);
    }

    #[test]
    fn test_header_max_length_counts_characters() {
        // 150 characters, most of them multi-byte.
        let header = format!("feat: x / {}", "あ".repeat(140));
        assert_eq!(header.chars().count(), 150);
        assert!(run(&HeaderMaxLength, &header, Always, Some(RuleValue::Number(150))).passed);
    }

    #[test]
    fn test_header_max_length_requires_number() {
        assert!(HeaderMaxLength.validate_value(None).is_err());
        assert!(HeaderMaxLength.validate_value(text("72").as_ref()).is_err());
        assert!(HeaderMaxLength
            .validate_value(Some(&RuleValue::Number(72)))
            .is_ok());
    }

    #[test]
    fn test_header_trim() {
        assert!(run(&HeaderTrim, "feat: a / b", Always, None).passed);
        let verdict = run(&HeaderTrim, " feat: a / b", Always, None);
        assert_eq!(
            verdict.message.as_deref(),
            Some("header must not start with whitespace")
        );
    }

    #[test]
    fn test_type_enum() {
        let types = || Some(RuleValue::List(vec!["feat".to_string(), "fix".to_string()]));
        assert!(run(&TypeEnum, "fix: a / b", Always, types()).passed);

        let verdict = run(&TypeEnum, "wip: a / b", Always, types());
        assert_eq!(
            verdict.message.as_deref(),
            Some("type must be one of [feat, fix]")
        );

        assert!(!run(&TypeEnum, "fix: a / b", Never, types()).passed);

        // No type to check.
        assert!(run(&TypeEnum, "a / b", Always, types()).passed);
    }

    #[test]
    fn test_type_case() {
        assert!(run(&TypeCase, "feat: a / b", Always, text("lower-case")).passed);
        assert!(!run(&TypeCase, "FEAT: a / b", Always, text("lower-case")).passed);
        assert!(run(&TypeCase, "FEAT: a / b", Always, text("upper-case")).passed);

        assert!(TypeCase.validate_value(text("lower-case").as_ref()).is_ok());
        assert!(TypeCase.validate_value(text("kebab-case").as_ref()).is_err());
    }

    #[test]
    fn test_type_and_subject_empty() {
        assert!(run(&TypeEmpty, "feat: a / b", Never, None).passed);
        let verdict = run(&TypeEmpty, "just words", Never, None);
        assert_eq!(verdict.message.as_deref(), Some("type may not be empty"));

        assert!(run(&SubjectEmpty, "feat: a / b", Never, None).passed);
        assert!(!run(&SubjectEmpty, "just words", Never, None).passed);
        assert!(run(&SubjectEmpty, "just words", Always, None).passed);
    }

    #[test]
    fn test_subject_full_stop() {
        assert!(run(&SubjectFullStop, "feat: a / b", Never, text(".")).passed);
        let verdict = run(&SubjectFullStop, "feat: a / b.", Never, text("."));
        assert_eq!(
            verdict.message.as_deref(),
            Some("subject may not end with full stop")
        );
    }

    #[test]
    fn test_body_leading_blank() {
        assert!(run(&BodyLeadingBlank, "feat: a / b\n\nbody", Always, None).passed);
        assert!(!run(&BodyLeadingBlank, "feat: a / b\nbody", Always, None).passed);
        assert!(run(&BodyLeadingBlank, "feat: a / b", Always, None).passed);
    }

    #[test]
    fn test_body_max_line_length() {
        let message = format!("feat: a / b\n\nshort\n{}", "x".repeat(101));
        let verdict = run(&BodyMaxLineLength, &message, Always, Some(RuleValue::Number(100)));
        assert!(!verdict.passed);

        let message = "feat: a / b\n\nshort";
        assert!(run(&BodyMaxLineLength, message, Always, Some(RuleValue::Number(100))).passed);
    }

    fn subject_cases() -> Option<RuleValue> {
        Some(RuleValue::List(
            ["sentence-case", "start-case", "pascal-case", "upper-case"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        ))
    }

    #[test]
    fn test_subject_case_rejects_capitalised_subject() {
        let verdict = run(&SubjectCase, "feat: Add login / ログイン機能を追加", Never, subject_cases());
        assert!(!verdict.passed);
        assert_eq!(
            verdict.message.as_deref(),
            Some("subject must not be sentence-case, start-case, pascal-case, upper-case")
        );

        assert!(run(&SubjectCase, "feat: add login / ログイン機能を追加", Never, subject_cases()).passed);
        assert!(!run(&SubjectCase, "feat: ADD LOGIN", Never, subject_cases()).passed);
        assert!(!run(&SubjectCase, "feat: AddLogin", Never, subject_cases()).passed);
    }

    #[test]
    fn test_subject_case_ignores_quoted_names() {
        let message = "docs: `Eslint` config / 設定";
        assert!(run(&SubjectCase, message, Never, subject_cases()).passed);
    }

    #[test]
    fn test_case_conversions() {
        assert!(is_case("Add login", "sentence-case"));
        assert!(is_case("Add Login", "start-case"));
        assert!(!is_case("add login", "start-case"));
        assert!(is_case("AddLogin", "pascal-case"));
        assert!(!is_case("addLogin", "pascal-case"));
        assert!(is_case("ADD", "upper-case"));
        assert!(!is_case("add", "kebab-case"));
        // Leading digits always count as matching.
        assert!(is_case("404 page", "sentence-case"));
    }

    #[test]
    fn test_footer_max_line_length() {
        let message = format!(
            "feat: a / b\n\nbody\n\nBREAKING CHANGE: {}",
            "x".repeat(150)
        );
        let verdict = run(&FooterMaxLineLength, &message, Always, Some(RuleValue::Number(100)));
        assert_eq!(
            verdict.message.as_deref(),
            Some("footer's lines must not be longer than 100 characters")
        );

        let message = "feat: a / b\n\nBREAKING CHANGE: short";
        assert!(run(&FooterMaxLineLength, message, Always, Some(RuleValue::Number(100))).passed);
        assert!(run(&FooterMaxLineLength, "feat: a / b", Always, Some(RuleValue::Number(100))).passed);
    }

    #[test]
    fn test_footer_leading_blank() {
        let message = "feat: a / b\n\nbody\nBREAKING CHANGE: gone";
        let verdict = run(&FooterLeadingBlank, message, Always, None);
        assert_eq!(
            verdict.message.as_deref(),
            Some("footer must have leading blank line")
        );

        let message = "feat: a / b\n\nbody\n\nBREAKING CHANGE: gone";
        assert!(run(&FooterLeadingBlank, message, Always, None).passed);
        assert!(run(&FooterLeadingBlank, "feat: a / b\n\nbody", Always, None).passed);
    }
}
