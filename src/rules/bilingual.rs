// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! English / Japanese header rules.
//!
//! A header is written as `type(scope): english description / 日本語の説明`.
//! These rules catch the two ways that goes wrong in practice: a header
//! that does not follow the shape, and a squashed commit whose body still
//! carries other commits' headers.

use crate::commit::Commit;
use crate::config::{Applicability, RuleValue};
use lazy_static::lazy_static;
use regex::Regex;

use super::{Rule, RuleVerdict};

/// Separator between the English and Japanese halves.
pub const SEPARATOR: &str = " / ";

lazy_static! {
    /// Shape of the English half: `type(scope): printable ascii`.
    static ref ENGLISH_HEADER_REGEX: Regex =
        Regex::new(r"^[a-z]+(?:\([a-z0-9-]+\))?: [ -~]+$").unwrap();

    /// A `type:` or `type(scope):` prefix anywhere in the text.
    static ref ANOTHER_HEADER_REGEX: Regex =
        Regex::new(r"[a-z]+(?:\([a-z0-9-]+\))?:").unwrap();
}

/// Why a header or body was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BilingualViolation {
    /// The header has no `" / "`.
    MissingSeparator,
    /// The part before the separator is not `type(scope): ascii text`.
    MalformedEnglishPart { segment: String },
    /// The Japanese part looks like it carries a second header.
    EmbeddedSecondHeader,
    /// A body line looks like a full bilingual header.
    BodyEmbeddedHeader,
}

impl BilingualViolation {
    /// The English + Japanese message shown to the commit author.
    pub fn message(&self) -> String {
        match self {
            BilingualViolation::MissingSeparator => concat!(
                "Header must be in 'English / Japanese' format with ' / ' separator.\n",
                "ヘッダーは '英語 / 日本語' の形式で、間に ' / ' (スペース+スラッシュ+スペース) を入れてください"
            )
            .to_string(),
            BilingualViolation::MalformedEnglishPart { segment } => format!(
                "The English part must contain only ASCII characters and follow 'type: description' format.\n\
                 英語部分（前半）に全角文字が含まれているか、形式が \"type: description\" になっていません。\n\
                 Target/対象: \"{}\"",
                segment
            ),
            BilingualViolation::EmbeddedSecondHeader => concat!(
                "The Japanese part of the header appears to contain another commit message. ",
                "Please ensure the header contains only one commit message.\n",
                "ヘッダーの日本語部分に、別のコミットメッセージが含まれているようです。",
                "ヘッダーには単一のメッセージのみを記述してください。"
            )
            .to_string(),
            BilingualViolation::BodyEmbeddedHeader => concat!(
                "The commit body seems to contain another commit message. ",
                "Please split into multiple commits or consolidate the message.\n",
                "コミットボディに別のコミットメッセージが含まれているようです。",
                "コミットを分割するか、メッセージを1つにまとめてください。"
            )
            .to_string(),
        }
    }
}

impl std::fmt::Display for BilingualViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<Option<BilingualViolation>> for RuleVerdict {
    fn from(violation: Option<BilingualViolation>) -> Self {
        match violation {
            Some(violation) => RuleVerdict::fail(violation.message()),
            None => RuleVerdict::pass(),
        }
    }
}

/// Whether `text` has the shape of an English header.
pub fn is_english_header(text: &str) -> bool {
    ENGLISH_HEADER_REGEX.is_match(text)
}

/// Check a header. Returns the first problem found.
pub fn check_header(header: &str) -> Option<BilingualViolation> {
    let (english_part, japanese_part) = match header.split_once(SEPARATOR) {
        Some(parts) => parts,
        None => return Some(BilingualViolation::MissingSeparator),
    };

    if !is_english_header(english_part) {
        return Some(BilingualViolation::MalformedEnglishPart {
            segment: english_part.to_string(),
        });
    }

    if japanese_part.contains(SEPARATOR) || ANOTHER_HEADER_REGEX.is_match(japanese_part) {
        return Some(BilingualViolation::EmbeddedSecondHeader);
    }

    None
}

/// Check a body. Stops at the first line that looks like a header.
pub fn check_body(body: Option<&str>) -> Option<BilingualViolation> {
    let body = match body {
        Some(body) if !body.is_empty() => body,
        _ => return None,
    };

    for (index, line) in body.split('\n').enumerate() {
        // A byte-order mark counts as whitespace here.
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        let line = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
            .unwrap_or(line);

        if let Some((english_part, _)) = line.split_once(SEPARATOR) {
            if is_english_header(english_part) {
                tracing::trace!("Body line {} looks like a header", index + 1);
                return Some(BilingualViolation::BodyEmbeddedHeader);
            }
        }
    }

    None
}

/// `header-regex`: the header is `English / Japanese` with one message.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRegex;

impl Rule for HeaderRegex {
    fn name(&self) -> &'static str {
        "header-regex"
    }

    fn check(
        &self,
        commit: &Commit,
        _when: Applicability,
        _value: Option<&RuleValue>,
    ) -> RuleVerdict {
        check_header(&commit.header).into()
    }
}

/// `body-no-multi-header`: the body does not embed another commit message.
#[derive(Debug, Clone, Copy)]
pub struct BodyNoMultiHeader;

impl Rule for BodyNoMultiHeader {
    fn name(&self) -> &'static str {
        "body-no-multi-header"
    }

    fn check(
        &self,
        commit: &Commit,
        _when: Applicability,
        _value: Option<&RuleValue>,
    ) -> RuleVerdict {
        check_body(commit.body.as_deref()).into()
    }
}
