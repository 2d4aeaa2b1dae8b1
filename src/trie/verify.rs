//! Structural self-checks and shape statistics.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::node::Node;
use super::RadixTrieSet;
use crate::text;

/// A broken structural invariant, reported by [`RadixTrieSet::verify`].
///
/// `path` is the concatenation of edge labels from the root to the node
/// where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root carries a completed key.
    KeyedRoot,
    /// An edge has an empty label.
    EmptyLabel {
        /// Path of the edge's source node.
        path: String,
    },
    /// Two edges leaving the same node start with the same character.
    SharedFirstChar {
        /// Path of the node the edges leave.
        path: String,
        /// The character they share.
        first: char,
    },
    /// A node's completed key differs from the labels leading to it.
    KeyMismatch {
        /// Labels leading to the node.
        path: String,
        /// The key the node carries.
        key: String,
    },
    /// A keyless node other than the root has fewer than two edges, or the
    /// root of a non-empty set has none.
    RedundantNode {
        /// Path of the offending node.
        path: String,
    },
    /// The stored count differs from the number of keyed nodes.
    LenMismatch {
        /// The count held by the set.
        recorded: usize,
        /// Keyed nodes actually found.
        counted: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyedRoot => f.write_str("root node carries a key"),
            Self::EmptyLabel { path } => write!(f, "empty edge label below {path:?}"),
            Self::SharedFirstChar { path, first } => {
                write!(f, "several edges below {path:?} start with {first:?}")
            }
            Self::KeyMismatch { path, key } => {
                write!(f, "node at {path:?} carries key {key:?}")
            }
            Self::RedundantNode { path } => {
                write!(f, "keyless node at {path:?} does not branch")
            }
            Self::LenMismatch { recorded, counted } => {
                write!(f, "set records {recorded} keys but holds {counted}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Shape statistics of a `RadixTrieSet`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// All nodes, root included.
    pub nodes: usize,
    /// All edges; one less than `nodes` for a non-empty trie.
    pub edges: usize,
    /// Nodes carrying a completed key.
    pub keyed_nodes: usize,
    /// Keyless nodes, root included.
    pub branching_nodes: usize,
    /// Longest root-to-leaf path, in edges.
    pub max_depth: usize,
    /// Sum of all edge label lengths, in bytes.
    pub label_bytes: usize,
}

impl RadixTrieSet {
    /// Checks every structural invariant of the trie.
    ///
    /// Meant for tests and debugging: it walks the whole structure and
    /// rebuilds each node's path.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root.as_ref() else {
            return match self.len {
                0 => Ok(()),
                recorded => Err(InvariantViolation::LenMismatch { recorded, counted: 0 }),
            };
        };
        if root.key.is_some() {
            return Err(InvariantViolation::KeyedRoot);
        }
        if root.is_leaf() {
            return Err(InvariantViolation::RedundantNode { path: String::new() });
        }

        let mut counted = 0;
        let mut stack: Vec<(&Node, String)> = vec![(root, String::new())];

        while let Some((node, path)) = stack.pop() {
            if let Some(key) = node.key.as_deref() {
                if key != path {
                    return Err(InvariantViolation::KeyMismatch {
                        path,
                        key: key.to_string(),
                    });
                }
                counted += 1;
            } else if !path.is_empty() && node.edges.len() < 2 {
                return Err(InvariantViolation::RedundantNode { path });
            }

            let mut firsts: Vec<char> = Vec::with_capacity(node.edges.len());
            for edge in &node.edges {
                let Some(first) = text::first_char(&edge.label) else {
                    return Err(InvariantViolation::EmptyLabel { path });
                };
                if firsts.contains(&first) {
                    return Err(InvariantViolation::SharedFirstChar { path, first });
                }
                firsts.push(first);

                let mut child_path = path.clone();
                child_path.push_str(&edge.label);
                stack.push((&edge.target, child_path));
            }
        }

        if counted == self.len {
            Ok(())
        } else {
            Err(InvariantViolation::LenMismatch {
                recorded: self.len,
                counted,
            })
        }
    }

    /// Collects shape statistics by walking every node.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let Some(root) = self.root.as_ref() else {
            return stats;
        };

        let mut stack = vec![(root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            if node.key.is_some() {
                stats.keyed_nodes += 1;
            } else {
                stats.branching_nodes += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);
            for edge in &node.edges {
                stats.edges += 1;
                stats.label_bytes += edge.label.len();
                stack.push((&edge.target, depth + 1));
            }
        }
        stats
    }
}
