use std::fmt;

use crate::namespace::Node;

/// Indentation emitted per level of depth when an entry is displayed.
const INDENT: &str = "  ";

/// One directory yielded by [`Listing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    pub depth: usize,
    pub name: &'a str,
}

impl fmt::Display for ListEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", INDENT.repeat(self.depth), self.name)
    }
}

/// Depth-first walk over a tree, yielding siblings in ascending name order.
///
/// Children are pushed onto the stack in descending order, so popping them
/// yields ascending order while each subtree is finished before its next sibling.
/// The node the walk starts from is never yielded; its children have depth 0.
#[derive(Debug)]
pub struct Listing<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Listing<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        let mut listing = Self { stack: Vec::new() };
        listing.push_children(root, 0);
        listing
    }

    fn push_children(&mut self, node: &'a Node, depth: usize) {
        let mut children: Vec<&Node> = node.children().collect();
        children.sort_unstable_by(|a, b| b.name().cmp(a.name()));
        self.stack
            .extend(children.into_iter().map(|child| (depth, child)));
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = ListEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.push_children(node, depth + 1);
        Some(ListEntry {
            depth,
            name: node.name(),
        })
    }
}
