use log::{debug, info};

use crate::core::error::{FsError, SeedError};
use crate::models::{
    FileKind, Node, NodeId, NodeKind, OpenAction, SeedDirectory, SeedLink, SeedNode,
};

/// In-memory filesystem tree.
///
/// Every node lives in a single arena; directories hold the ids of their
/// children in insertion order and each node keeps a non-owning id of its
/// parent. Nodes are only ever appended, so ids never dangle.
///
/// # Path Convention
///
/// - Root: name `""`, path `[""]`, displayed as `/`
/// - Nested directory: path `["", "home", "justin"]`, displayed as `/home/justin`
#[derive(Clone, Debug)]
pub struct VirtualFs {
    nodes: Vec<Node>,
}

impl VirtualFs {
    /// Create a filesystem holding only an empty root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: String::new(),
                parent: None,
                kind: NodeKind::empty_directory(),
            }],
        }
    }

    /// Build a filesystem from a seed tree.
    ///
    /// The seed's own name is ignored; its children populate the root. Any
    /// duplicate or unusable name aborts construction.
    pub fn from_seed(seed: &SeedDirectory) -> Result<Self, SeedError> {
        let mut fs = Self::new();
        fs.populate(NodeId::ROOT, &seed.children)?;
        info!("filesystem seeded with {} nodes", fs.len());
        Ok(fs)
    }

    /// Parse a JSON seed tree and build a filesystem from it.
    pub fn from_seed_json(json: &str) -> Result<Self, SeedError> {
        let seed: SeedDirectory = serde_json::from_str(json)?;
        Self::from_seed(&seed)
    }

    fn populate(&mut self, dir: NodeId, children: &[SeedNode]) -> Result<(), SeedError> {
        for child in children {
            let created = match child {
                SeedNode::Directory(sub) => self.add_directory(dir, &sub.name),
                SeedNode::Link(link) => self.add_file(dir, link),
            };
            let id = created.map_err(|e| {
                let mut path = self.display_path(dir);
                if !path.ends_with('/') {
                    path.push('/');
                }
                path.push_str(child.name());
                match e {
                    FsError::DuplicateName(_) => SeedError::DuplicateName { path },
                    _ => SeedError::InvalidName { path },
                }
            })?;
            if let SeedNode::Directory(sub) = child {
                self.populate(id, &sub.children)?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Node Access
    // =========================================================================

    /// Id of the root directory.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn is_directory(&self, id: NodeId) -> bool {
        self.node(id).kind.is_directory()
    }

    /// Children of a directory in insertion order (empty for files).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).kind {
            NodeKind::Directory { children } => children,
            NodeKind::File(_) => &[],
        }
    }

    /// Find a direct child by name.
    pub fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.children(dir)
            .iter()
            .copied()
            .find(|&child| self.name(child) == name)
    }

    /// Names from the root to `id`, the root contributing `""`.
    pub fn path(&self, id: NodeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(self.name(node).to_string());
            current = self.parent(node);
        }
        path.reverse();
        path
    }

    /// Absolute path for display: `/` for the root, `/a/b` otherwise.
    pub fn display_path(&self, id: NodeId) -> String {
        let path = self.path(id);
        if path.len() == 1 {
            "/".to_string()
        } else {
            path.join("/")
        }
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Create an empty directory named `name` inside `parent`.
    pub fn add_directory(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.insert(parent, name, NodeKind::empty_directory())
    }

    /// Create a link file inside `parent` from a seed descriptor.
    pub fn add_file(&mut self, parent: NodeId, desc: &SeedLink) -> Result<NodeId, FsError> {
        self.insert(
            parent,
            &desc.name,
            NodeKind::File(FileKind::Link {
                url: desc.url.clone(),
            }),
        )
    }

    fn insert(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> Result<NodeId, FsError> {
        Self::check_name(name)?;
        if self.find_child(parent, name).is_some() {
            return Err(FsError::DuplicateName(name.to_string()));
        }

        let id = NodeId(self.nodes.len());
        match &mut self.nodes[parent.0].kind {
            NodeKind::Directory { children } => children.push(id),
            NodeKind::File(_) => return Err(FsError::NotFound),
        }
        self.nodes.push(Node {
            name: name.to_string(),
            parent: Some(parent),
            kind,
        });
        debug!("created {} in {}", name, self.display_path(parent));
        Ok(id)
    }

    /// `""`, `.` and `..` always exist in a directory; names never contain `/`.
    fn check_name(name: &str) -> Result<(), FsError> {
        match name {
            "" | "." | ".." => Err(FsError::DuplicateName(name.to_string())),
            _ if name.contains('/') => Err(FsError::InvalidName(name.to_string())),
            _ => Ok(()),
        }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve path segments starting at `from`.
    ///
    /// Empty segments and `.` are skipped, `..` moves to the parent (the root
    /// absorbs excess `..`). A file only resolves as the last segment.
    pub fn resolve<S: AsRef<str>>(&self, from: NodeId, segments: &[S]) -> Result<NodeId, FsError> {
        let mut current = from;
        for (i, segment) in segments.iter().enumerate() {
            match segment.as_ref() {
                "" | "." => {}
                ".." => current = self.parent(current).unwrap_or(current),
                name => {
                    let Some(child) = self.find_child(current, name) else {
                        debug!("{} not found in {}", name, self.display_path(current));
                        return Err(FsError::NotFound);
                    };
                    match &self.node(child).kind {
                        NodeKind::Directory { .. } => current = child,
                        NodeKind::File(_) if i + 1 == segments.len() => return Ok(child),
                        NodeKind::File(_) => return Err(FsError::NotFound),
                    }
                }
            }
        }
        Ok(current)
    }

    /// Resolve segments to a directory.
    pub fn resolve_directory<S: AsRef<str>>(
        &self,
        from: NodeId,
        segments: &[S],
    ) -> Result<NodeId, FsError> {
        let id = self.resolve(from, segments)?;
        match self.node(id).kind {
            NodeKind::Directory { .. } => Ok(id),
            NodeKind::File(_) => Err(FsError::NotFound),
        }
    }

    /// Resolve segments to a file.
    pub fn resolve_file<S: AsRef<str>>(
        &self,
        from: NodeId,
        segments: &[S],
    ) -> Result<(NodeId, &FileKind), FsError> {
        let id = self.resolve(from, segments)?;
        match &self.node(id).kind {
            NodeKind::File(file) => Ok((id, file)),
            NodeKind::Directory { .. } => Err(FsError::NotFound),
        }
    }

    /// Home directory of `user`: `/home/<user>`, or the root if it is missing.
    pub fn home(&self, user: &str) -> NodeId {
        self.resolve_directory(self.root(), &["home", user])
            .unwrap_or(NodeId::ROOT)
    }

    /// Pick the start directory for user-supplied path segments.
    ///
    /// A leading `""` (absolute path) starts at the root, a leading `~` starts at
    /// the root with `home/<user>` substituted for it, anything else starts at `cwd`.
    pub fn anchor(&self, cwd: NodeId, user: &str, segments: &[String]) -> (NodeId, Vec<String>) {
        match segments.split_first() {
            Some((first, _)) if first.is_empty() => (self.root(), segments.to_vec()),
            Some((first, rest)) if first == "~" => {
                let mut rewritten = vec!["home".to_string(), user.to_string()];
                rewritten.extend_from_slice(rest);
                (self.root(), rewritten)
            }
            _ => (cwd, segments.to_vec()),
        }
    }

    /// Open a node. Only files have an open action.
    pub fn open(&self, id: NodeId) -> Option<OpenAction> {
        match &self.node(id).kind {
            NodeKind::File(file) => {
                let action = file.open();
                info!("open {}: {}", self.display_path(id), action);
                Some(action)
            }
            NodeKind::Directory { .. } => None,
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}
