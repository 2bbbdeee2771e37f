use std::collections::HashMap;

use snafu::Snafu;
use tracing::{debug, info};

use crate::namespace::{Listing, NamespacePath};

/// A single directory, exclusively owning its children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    name: String,
    children: HashMap<String, Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns the child called `name`, creating an empty one when missing.
    fn child_or_insert(&mut self, name: &str) -> &mut Node {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Node::new(name))
    }

    /// Inserts `node` under its own name, replacing any existing child of that name.
    fn attach(&mut self, node: Node) -> Option<Node> {
        self.children.insert(node.name.clone(), node)
    }

    fn remove(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }
}

/// In-memory tree of named directories addressed by slash-delimited paths.
///
/// The root is synthetic: it has no name and is never listed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceTree {
    root: Node,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the directory at `path` along with any missing ancestors.
    ///
    /// Creating a path that already exists is a no-op.
    pub fn create(&mut self, path: impl Into<NamespacePath>) {
        let path = path.into();
        info!("CREATE {}", path);
        self.resolve_or_create(path.segments());
    }

    /// Lazily lists every directory depth-first, siblings in ascending name order.
    pub fn list(&self) -> Listing<'_> {
        debug!("LIST");
        Listing::new(&self.root)
    }

    /// Moves the directory at `source`, with its whole subtree, under `destination`.
    ///
    /// Missing segments of `destination` are created. A directory with the same
    /// name already under `destination` is replaced by the moved one.
    pub fn move_node(
        &mut self,
        source: impl Into<NamespacePath>,
        destination: impl Into<NamespacePath>,
    ) -> Result<(), NamespaceError> {
        let source = source.into();
        let destination = destination.into();
        info!("MOVE {} {}", source, destination);

        self.resolve(&source, "move")?;
        if destination.starts_with(&source) {
            return MoveIntoSubtreeSnafu {
                from: source.to_string(),
                to: destination.to_string(),
            }
            .fail();
        }

        let node = self.detach(&source, "move")?;
        let parent = self.resolve_or_create(destination.segments());
        if let Some(replaced) = parent.attach(node) {
            debug!(
                "Replaced existing '{}' under {} while moving {}",
                replaced.name, destination, source
            );
        }

        Ok(())
    }

    /// Deletes the directory at `path` together with its whole subtree.
    pub fn delete(&mut self, path: impl Into<NamespacePath>) -> Result<(), NamespaceError> {
        let path = path.into();
        info!("DELETE {}", path);
        let removed = self.detach(&path, "delete")?;
        debug!("Deleted '{}' with {} children", removed.name, removed.len());
        Ok(())
    }

    /// Walks every segment of `path`, failing on the first one that is missing.
    fn resolve(&self, path: &NamespacePath, action: &'static str) -> Result<&Node, NamespaceError> {
        let mut node = &self.root;
        for segment in path.segments() {
            node = match node.children.get(segment) {
                Some(child) => child,
                None => return Self::not_found(action, path, segment),
            };
        }
        Ok(node)
    }

    /// Removes the node at `path` from its parent and hands back the owned subtree.
    fn detach(&mut self, path: &NamespacePath, action: &'static str) -> Result<Node, NamespaceError> {
        let (parents, last) = path.split_last();

        let mut parent = &mut self.root;
        for segment in parents {
            parent = match parent.children.get_mut(segment) {
                Some(child) => child,
                None => return Self::not_found(action, path, segment),
            };
        }

        match parent.remove(last) {
            Some(node) => Ok(node),
            None => Self::not_found(action, path, last),
        }
    }

    fn resolve_or_create(&mut self, segments: &[String]) -> &mut Node {
        segments
            .iter()
            .fold(&mut self.root, |node, segment| node.child_or_insert(segment))
    }

    fn not_found<T>(
        action: &'static str,
        path: &NamespacePath,
        segment: &str,
    ) -> Result<T, NamespaceError> {
        SegmentNotFoundSnafu {
            action,
            path: path.to_string(),
            segment,
        }
        .fail()
    }
}

#[cfg(test)]
impl Node {
    pub(crate) fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
impl NamespaceTree {
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub(crate) fn get(&self, path: impl Into<NamespacePath>) -> Option<&Node> {
        self.resolve(&path.into(), "get").ok()
    }

    pub(crate) fn contains(&self, path: impl Into<NamespacePath>) -> bool {
        self.get(path).is_some()
    }
}

#[derive(Debug, Snafu)]
pub enum NamespaceError {
    #[snafu(display("Cannot {} {} - {} does not exist", action, path, segment))]
    SegmentNotFound {
        action: &'static str,
        path: String,
        segment: String,
    },
    #[snafu(display("Cannot move {} into its own subtree {}", from, to))]
    MoveIntoSubtree { from: String, to: String },
}
