// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the linter.
//!
//! Rule failures are not errors: they are reported as verdicts. The types
//! here cover the things that stop linting from happening at all, such as
//! an unreadable rules table or an empty commit message.

use thiserror::Error;

/// The main error type for lint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Found rule without implementation: {name}")]
    UnknownRule { name: String },

    #[error("Unknown preset: {name}")]
    UnknownPreset { name: String },
}

/// Commit-related errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,
}

/// Result type alias for lint operations.
pub type Result<T> = std::result::Result<T, LintError>;
