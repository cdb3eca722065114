// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Linting module.
//!
//! This module runs a resolved rules table over commit messages and
//! collects the failures into a report.

mod engine;
mod report;

pub use engine::Linter;
pub use report::{LintProblem, LintReport, OutputFormat};
