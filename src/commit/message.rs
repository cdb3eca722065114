// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{CommitError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for splitting a conventional commit header.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[A-Za-z0-9_]*)(?:\((?P<scope>.*)\))?(?P<breaking>!)?: (?P<subject>.*)$"
    ).unwrap();
}

/// Footer keywords that end the body.
const FOOTER_KEYWORDS: &[&str] = &["BREAKING CHANGE:", "BREAKING-CHANGE:"];

/// A commit message split into the parts rules look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The message as given, minus trailing whitespace and leading blank lines.
    pub raw: String,
    /// First line, verbatim.
    pub header: String,
    /// Text between the header and the footer.
    pub body: Option<String>,
    /// Trailing `BREAKING CHANGE:` block.
    pub footer: Option<String>,
    /// Commit type (feat, fix, etc.), when the header is conventional.
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Text after `type(scope): `.
    pub subject: Option<String>,
}

impl Commit {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Result<Self> {
        let raw = message
            .trim_end()
            .trim_start_matches(|c: char| c == '\n' || c == '\r')
            .to_string();

        if raw.trim().is_empty() {
            return Err(CommitError::EmptyMessage.into());
        }

        let mut lines = raw.split('\n');
        let header = lines
            .next()
            .unwrap_or_default()
            .trim_end_matches('\r')
            .to_string();

        let rest: Vec<&str> = lines.collect();
        let footer_start = rest.iter().position(|line| {
            FOOTER_KEYWORDS
                .iter()
                .any(|keyword| line.trim_start().starts_with(keyword))
        });
        let (body_lines, footer_lines) = match footer_start {
            Some(index) => rest.split_at(index),
            None => (&rest[..], &[][..]),
        };

        let body = non_empty(body_lines.join("\n").trim());
        let footer = non_empty(footer_lines.join("\n").trim());

        let (commit_type, scope, subject) = match HEADER_REGEX.captures(&header) {
            Some(captures) => (
                captures.name("type").and_then(|m| non_empty(m.as_str())),
                captures.name("scope").and_then(|m| non_empty(m.as_str())),
                captures.name("subject").and_then(|m| non_empty(m.as_str())),
            ),
            None => (None, None, None),
        };

        Ok(Self {
            raw,
            header,
            body,
            footer,
            commit_type,
            scope,
            subject,
        })
    }

    /// Build a commit directly from a header and optional body.
    pub fn from_parts(header: &str, body: Option<&str>) -> Result<Self> {
        match body {
            Some(body) if !body.is_empty() => Self::parse(&format!("{}\n\n{}", header, body)),
            _ => Self::parse(header),
        }
    }

    /// Index into `raw.split('\n')` of the first footer line.
    pub fn footer_start_line(&self) -> Option<usize> {
        self.raw
            .split('\n')
            .skip(1)
            .position(|line| {
                FOOTER_KEYWORDS
                    .iter()
                    .any(|keyword| line.trim_start().starts_with(keyword))
            })
            .map(|index| index + 1)
    }

    /// Header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
