use core::iter::FusedIterator;

use super::node::Node;

/// Iterator over the keys of a `RadixTrieSet`, or of one of its subtrees.
/// Yields `&str` borrowed from the set, in depth-first pre-order.
pub struct Iter<'a> {
    // Nodes still to visit; the next one is on top.
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn empty() -> Self {
        Self { stack: Vec::new() }
    }

    pub(crate) fn below(node: &'a Node) -> Self {
        Self { stack: vec![node] }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reversed so the first edge is visited first.
            self.stack.extend(node.edges.iter().rev().map(|edge| &edge.target));
            if let Some(key) = node.key.as_deref() {
                return Some(key);
            }
        }
        None
    }
}

impl FusedIterator for Iter<'_> {}

/// Iterator over the keys lying on the path spelled by a query, i.e. the
/// members that are prefixes of it, shortest first.
///
/// Stops at a leaf, once the whole query has been matched, or when no edge
/// extends the match.
pub struct PathKeys<'a, 'q> {
    node: Option<&'a Node>,
    query: &'q str,
    consumed: usize,
}

impl<'a, 'q> PathKeys<'a, 'q> {
    pub(crate) fn new(root: Option<&'a Node>, query: &'q str) -> Self {
        Self {
            node: root,
            query,
            consumed: 0,
        }
    }
}

impl<'a> Iterator for PathKeys<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.node?;

            self.node = if self.consumed == self.query.len() {
                None
            } else {
                match node.descend(&self.query[self.consumed..]) {
                    Some((child, n)) => {
                        self.consumed += n;
                        Some(child)
                    }
                    None => None,
                }
            };

            if let Some(key) = node.key.as_deref() {
                return Some(key);
            }
        }
    }
}

impl FusedIterator for PathKeys<'_, '_> {}
