// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module.
//!
//! This module handles the rules table: its schema, the built-in presets,
//! and parsing and merging tables from TOML text.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{merge_tables, parse_config, preset, resolve_config};
pub use schema::*;
