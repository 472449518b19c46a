use std::fmt;

use serde::Deserialize;

// =============================================================================
// Node Identity
// =============================================================================

/// Index of a node inside a [`crate::core::VirtualFs`] arena.
///
/// Ids are only meaningful for the filesystem that issued them. Nodes are never
/// removed, so an id stays valid for the lifetime of its filesystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root directory always occupies the first arena slot.
    pub const ROOT: NodeId = NodeId(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// A single entry of the virtual filesystem.
#[derive(Clone, Debug)]
pub struct Node {
    /// Name, unique among siblings. Empty only for the root.
    pub name: String,
    /// Non-owning link to the containing directory (`None` only for the root).
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

/// Closed set of node kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Directory with children in insertion order.
    Directory { children: Vec<NodeId> },
    /// Leaf file.
    File(FileKind),
}

/// Kinds of leaf files.
#[derive(Clone, Debug, PartialEq)]
pub enum FileKind {
    /// File pointing at an external URL; opening it navigates there.
    Link { url: String },
}

impl NodeKind {
    pub fn empty_directory() -> Self {
        NodeKind::Directory {
            children: Vec::new(),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, NodeKind::Directory { .. })
    }
}

impl FileKind {
    /// Action requested when the file is opened.
    pub fn open(&self) -> OpenAction {
        match self {
            FileKind::Link { url } => OpenAction::Navigate { url: url.clone() },
        }
    }
}

/// Side effect produced by `open`, performed by the front-end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenAction {
    Navigate { url: String },
}

impl fmt::Display for OpenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigate { url } => write!(f, "navigate to {}", url),
        }
    }
}

// =============================================================================
// Seed Descriptors
// =============================================================================

/// Directory record of a seed tree: `{ "name": ..., "children": [...] }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDirectory {
    pub name: String,
    pub children: Vec<SeedNode>,
}

/// Link file record of a seed tree: `{ "name": ..., "url": ... }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedLink {
    pub name: String,
    pub url: String,
}

/// Either shape of a seed record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SeedNode {
    Directory(SeedDirectory),
    Link(SeedLink),
}

impl SeedNode {
    pub fn name(&self) -> &str {
        match self {
            SeedNode::Directory(dir) => &dir.name,
            SeedNode::Link(link) => &link.name,
        }
    }
}

impl SeedDirectory {
    pub fn new(name: impl Into<String>, children: Vec<SeedNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

impl SeedLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
