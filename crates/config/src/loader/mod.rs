//! Profile loader.
//!
//! Responsibilities:
//! - Locate biome files on the search path and parse their documents.
//! - Resolve a named biome through its inheritance chain.
//! - Read external dotenv files and tool settings from the environment.
//!
//! Does NOT handle:
//! - Activating a profile (see the engine crate).
//! - Writing dotenv files (see `export`).
//!
//! Invariants / Assumptions:
//! - A file that cannot be opened is skipped; a file that cannot be parsed is an error.
//! - Nothing in this module modifies the process environment.

mod document;
mod env;
mod error;
mod resolver;
mod search;

#[cfg(test)]
mod tests;

pub use env::{env_var_or_none, read_env_file};
pub use error::ConfigError;
pub use resolver::{find_profile, load_from_defaults, load_from_file};
pub use search::SearchPath;
