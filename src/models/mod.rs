//! Data models and types for the shell.
//!
//! Contains domain types for:
//! - [`Node`], [`NodeKind`], [`FileKind`], [`NodeId`] - Virtual filesystem representation
//! - [`SeedDirectory`], [`SeedLink`], [`SeedNode`] - Declarative seed trees
//! - [`OutputLine`] - Terminal output types

mod filesystem;
mod terminal;

pub use filesystem::{
    FileKind, Node, NodeId, NodeKind, OpenAction, SeedDirectory, SeedLink, SeedNode,
};
pub use terminal::{OutputLine, OutputLineData, TextStyle};
