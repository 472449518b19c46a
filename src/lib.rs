//! In-memory filesystem and line-oriented shell.
//!
//! - [`core`] - filesystem, command parsing/execution, autocomplete
//! - [`models`] - node, seed and output line types
//! - [`components`] - input line editor and output rendering
//! - [`app`] - the [`Terminal`] session tying them together

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;

pub use app::{Terminal, TerminalState};
pub use config::ShellConfig;
