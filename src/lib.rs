// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Bilingual commitlint - English / Japanese commit message rules
//!
//! Commit headers are written as `type(scope): english / 日本語`. This crate
//! provides the rules that enforce that shape, the conventional-commit
//! rules they are layered on, and a linter that runs a rules table over a
//! message.
//!
//! # Rules
//!
//! - **header-regex**: the header is `English / Japanese`, the English half
//!   is a printable-ASCII conventional header, and the Japanese half does
//!   not carry a second commit message
//! - **body-no-multi-header**: no body line is itself a bilingual header
//! - **header-max-length**: headers are capped at 150 characters
//!
//! # Example
//!
//! ```
//! use bilingual_commitlint::config::default_config;
//! use bilingual_commitlint::lint::Linter;
//!
//! let linter = Linter::from_config(&default_config()).unwrap();
//!
//! let report = linter.lint("feat: add login / ログイン機能を追加").unwrap();
//! assert!(report.is_valid());
//!
//! let report = linter.lint("feat: add login").unwrap();
//! assert_eq!(report.exit_code(), 1);
//! ```

// Module declarations
pub mod commit;
pub mod config;
pub mod error;
pub mod lint;
pub mod rules;

// Re-exports for convenience
pub use commit::Commit;
pub use config::LintConfig;
pub use error::{LintError, Result};
pub use lint::{LintReport, Linter};
pub use rules::{bilingual::{check_body, check_header}, RuleVerdict};
