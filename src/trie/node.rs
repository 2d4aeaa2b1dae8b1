use core::mem;

use crate::error::SetError;
use crate::text::{self, try_to_owned};

/// A labelled connection from a node to exactly one child.
///
/// The edge owns its child by value, so a node can never be reachable from
/// two edges and the structure is a tree by construction.
#[derive(Debug)]
pub(crate) struct Edge {
    /// The part of a key consumed by crossing this edge. Never empty.
    pub(crate) label: String,
    /// The subtree below this edge.
    pub(crate) target: Node,
}

/// A node in the radix trie.
///
/// Each node contains:
/// - An optional completed key, present iff an inserted key ends exactly here.
/// - The outgoing edges. No two of them have labels starting with the same
///   `char`, so a walk never has more than one candidate edge.
#[derive(Debug, Default)]
pub(crate) struct Node {
    /// The completed key, i.e. the concatenation of labels from the root.
    pub(crate) key: Option<String>,
    /// Outgoing edges, in insertion order.
    pub(crate) edges: Vec<Edge>,
}

impl Node {
    /// Creates a keyless, edgeless node.
    pub(crate) const fn branch() -> Self {
        Self {
            key: None,
            edges: Vec::new(),
        }
    }

    /// Creates a node carrying `key` with no children.
    pub(crate) fn leaf(key: String) -> Self {
        Self {
            key: Some(key),
            edges: Vec::new(),
        }
    }

    /// Returns true if the node has no outgoing edges.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    /// Finds the index of the only edge that can continue a walk whose
    /// unconsumed suffix is `rest`.
    ///
    /// The edge is selected on the first `char` alone; the caller still has
    /// to compare the rest of the label.
    pub(crate) fn edge_for(&self, rest: &str) -> Option<usize> {
        let first = text::first_char(rest)?;
        self.edges
            .iter()
            .position(|edge| text::first_char(&edge.label) == Some(first))
    }

    /// Follows the edge whose whole label is a prefix of `rest`.
    ///
    /// Returns the child and the number of bytes the edge consumed.
    pub(crate) fn descend(&self, rest: &str) -> Option<(&Node, usize)> {
        let edge = &self.edges[self.edge_for(rest)?];
        text::is_prefix(rest, &edge.label).then_some((&edge.target, edge.label.len()))
    }

    /// Appends an edge labelled `label` leading to a new leaf that carries `key`.
    pub(crate) fn push_leaf(&mut self, label: &str, key: &str) -> Result<(), SetError> {
        debug_assert!(!label.is_empty());
        debug_assert!(self.edge_for(label).is_none());

        let label = try_to_owned(label)?;
        let key = try_to_owned(key)?;
        self.edges.try_reserve(1)?;

        self.edges.push(Edge {
            label,
            target: Node::leaf(key),
        });
        Ok(())
    }
}

impl Edge {
    /// Splits this edge after `common` bytes of its label.
    ///
    /// `rest` is the unconsumed suffix of `key` at the edge's source node and
    /// shares exactly `common` bytes with the label. Afterwards the edge is
    /// labelled with the shared part and leads to a new keyless node, which
    /// holds the old subtree under the remainder of the old label and either
    /// carries `key` itself (when `rest` ends at the split point) or leads to
    /// a new leaf for it.
    ///
    /// Every allocation happens before the first mutation, so on error the
    /// edge is untouched.
    pub(crate) fn split(&mut self, common: usize, rest: &str, key: &str) -> Result<(), SetError> {
        debug_assert!(common > 0 && common < self.label.len());
        debug_assert!(common <= rest.len());

        let old_tail = try_to_owned(&self.label[common..])?;
        let mut middle = Node::branch();
        let new_edge = if common == rest.len() {
            middle.key = Some(try_to_owned(key)?);
            None
        } else {
            Some(Edge {
                label: try_to_owned(&rest[common..])?,
                target: Node::leaf(try_to_owned(key)?),
            })
        };
        middle.edges.try_reserve_exact(1 + usize::from(new_edge.is_some()))?;

        let old_target = mem::replace(&mut self.target, Node::branch());
        middle.edges.push(Edge {
            label: old_tail,
            target: old_target,
        });
        middle.edges.extend(new_edge);

        self.label.truncate(common);
        self.target = middle;
        Ok(())
    }
}

impl Drop for Node {
    // Dropping nested `Vec<Edge>`s recursively would use stack proportional
    // to the depth of the subtree; flatten it into a work-list instead.
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.edges);
        while let Some(mut edge) = pending.pop() {
            pending.append(&mut edge.target.edges);
        }
    }
}
