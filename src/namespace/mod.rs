//! In-memory hierarchical namespace of named directories.
//!
//! Directories are addressed by slash-delimited paths from a synthetic root.
//! Every node owns its children, so moving or deleting a node carries its
//! whole subtree with it.

mod listing;
mod path;
mod tree;

pub use listing::Listing;
pub use path::NamespacePath;
pub use tree::{NamespaceError, NamespaceTree, Node};
