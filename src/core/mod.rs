//! Core business logic for the shell.
//!
//! This module provides:
//! - [`VirtualFs`] in-memory filesystem with path resolution
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`complete`] for tab completion

pub mod autocomplete;
mod commands;
pub mod error;
mod filesystem;
pub mod parser;

pub use autocomplete::{AutocompleteResult, Completion, complete};
pub(crate) use commands::listing;
pub use commands::{Command, CommandResult, PathArg, execute_command};
pub use filesystem::VirtualFs;
pub use parser::{ParsedCommand, parse_input, split_path};
