//! Radix trie (compressed prefix tree) string set.
//!
//! Edges carry string labels rather than single characters, so chains of
//! single-child nodes collapse into one edge. Nodes own their edges and edges
//! own their target node by value; there are no back-pointers and no shared
//! nodes.
//!
//! Walks never backtrack: sibling labels start with distinct characters, so
//! at most one edge can continue any walk.

mod iter;
mod node;
mod serde_impl;
mod verify;

use core::fmt;

use crate::error::{require_non_empty, SetError};
use crate::set::{InsertOutcome, StringSet};
use crate::text::{self, try_to_owned};

pub use iter::{Iter, PathKeys};
pub use verify::{InvariantViolation, TrieStats};

use node::Node;

/// A set of non-empty strings stored in a radix trie.
///
/// Besides exact membership it answers prefix-family queries: which members
/// are prefixes of a given string. That walk touches one node per matched
/// edge, so its cost depends on the query length, not on the number of keys.
///
/// ```rust
/// use radix_strset::{InsertOutcome, RadixTrieSet};
///
/// let mut set = RadixTrieSet::new();
/// set.insert("app").unwrap();
/// set.insert("apple").unwrap();
/// assert_eq!(set.insert("app"), Ok(InsertOutcome::AlreadyPresent));
///
/// assert!(set.contains("apple"));
/// assert!(!set.contains("appl"));
/// assert_eq!(set.prefixes_of("applesauce").unwrap(), vec!["app", "apple"]);
/// ```
pub struct RadixTrieSet {
    /// `None` until the first key is inserted. The root never carries a key.
    root: Option<Node>,
    /// Number of nodes carrying a completed key.
    len: usize,
}

impl RadixTrieSet {
    /// Creates a new empty set. Does not allocate.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a set from `keys`, stopping at the first error.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a key is empty and `AllocationFailure`
    /// if memory runs out.
    pub fn try_from_keys<I, S>(keys: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.try_extend(keys)?;
        Ok(set)
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key, releasing all nodes.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(keys = self.len, "clearing radix trie");
        self.root = None;
        self.len = 0;
    }

    /// Returns true if `key` is a member. The empty string never is.
    pub fn contains(&self, key: &str) -> bool {
        let Some(mut node) = self.root.as_ref() else {
            return false;
        };
        if key.is_empty() {
            return false;
        }

        let mut consumed = 0;
        loop {
            if consumed == key.len() {
                return node.key.is_some();
            }
            if node.is_leaf() {
                return false;
            }
            match node.descend(&key[consumed..]) {
                Some((child, n)) => {
                    node = child;
                    consumed += n;
                }
                None => return false,
            }
        }
    }

    /// Adds `key` to the set.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty key. Returns
    /// `AllocationFailure` if memory runs out; the set is then unchanged.
    pub fn insert(&mut self, key: &str) -> Result<InsertOutcome, SetError> {
        require_non_empty(key, "key")?;

        let outcome = if let Some(root) = self.root.as_mut() {
            Self::insert_below(root, key)
        } else {
            Self::plant(key).map(|root| {
                self.root = Some(root);
                InsertOutcome::Inserted
            })
        };

        match outcome {
            Ok(InsertOutcome::Inserted) => self.len += 1,
            Ok(InsertOutcome::AlreadyPresent) => {}
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, key_len = key.len(), "radix trie insertion failed");
            }
        }
        outcome
    }

    /// Inserts every key from `keys`, returning how many were new.
    ///
    /// # Errors
    /// Stops at the first failing insertion and returns its error. Keys
    /// inserted before it stay in the set.
    pub fn try_extend<I, S>(&mut self, keys: I) -> Result<usize, SetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for key in keys {
            if self.insert(key.as_ref())?.is_inserted() {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Returns every member that is a prefix of `query`, shortest first.
    ///
    /// `query` itself is included if it is a member.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty query, `AllocationFailure` if
    /// the result cannot be allocated.
    pub fn prefixes_of<'a>(&'a self, query: &str) -> Result<Vec<&'a str>, SetError> {
        require_non_empty(query, "query")?;
        // At most one member ends at each character of the query.
        let mut found = Vec::new();
        found.try_reserve_exact(query.chars().count())?;
        found.extend(self.path_keys(query));
        Ok(found)
    }

    /// Returns the longest member that is a prefix of `query`, if any.
    pub fn longest_prefix_of<'a>(&'a self, query: &str) -> Option<&'a str> {
        if query.is_empty() {
            return None;
        }
        self.path_keys(query).last()
    }

    /// Returns every member that starts with `prefix`, including `prefix`
    /// itself if it is a member.
    ///
    /// This is the reverse relation of [`prefixes_of`](Self::prefixes_of).
    /// Keys come out in depth-first order.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty prefix.
    pub fn keys_with_prefix<'a>(&'a self, prefix: &str) -> Result<Vec<&'a str>, SetError> {
        require_non_empty(prefix, "prefix")?;
        Ok(self
            .subtree_for(prefix)
            .map(|node| Iter::below(node).collect())
            .unwrap_or_default())
    }

    /// Returns an iterator over all keys, in depth-first order.
    pub fn iter(&self) -> Iter<'_> {
        match &self.root {
            Some(root) => Iter::below(root),
            None => Iter::empty(),
        }
    }

    /// Walks the path spelled by `query`, yielding the keys found on it.
    pub fn path_keys<'a, 'q>(&'a self, query: &'q str) -> PathKeys<'a, 'q> {
        PathKeys::new(self.root.as_ref(), query)
    }

    fn plant(key: &str) -> Result<Node, SetError> {
        let mut root = Node::branch();
        root.push_leaf(key, key)?;
        Ok(root)
    }

    fn insert_below(root: &mut Node, key: &str) -> Result<InsertOutcome, SetError> {
        let mut node = root;
        let mut consumed = 0;

        loop {
            let rest = &key[consumed..];

            if rest.is_empty() {
                if node.key.is_some() {
                    return Ok(InsertOutcome::AlreadyPresent);
                }
                // A branching node from an earlier split ends exactly here.
                node.key = Some(try_to_owned(key)?);
                #[cfg(feature = "tracing")]
                tracing::trace!(depth = consumed, "marked branching node as completed");
                return Ok(InsertOutcome::Inserted);
            }

            let Some(idx) = node.edge_for(rest) else {
                node.push_leaf(rest, key)?;
                #[cfg(feature = "tracing")]
                tracing::trace!(depth = consumed, label_len = rest.len(), "appended leaf edge");
                return Ok(InsertOutcome::Inserted);
            };

            let label_len = node.edges[idx].label.len();
            let common = text::common_prefix_len(&node.edges[idx].label, rest);

            if common == label_len {
                consumed += common;
                node = &mut node.edges[idx].target;
            } else {
                node.edges[idx].split(common, rest, key)?;
                #[cfg(feature = "tracing")]
                tracing::trace!(depth = consumed, common, label_len, "split edge");
                return Ok(InsertOutcome::Inserted);
            }
        }
    }

    /// Finds the node whose subtree holds exactly the keys starting with `prefix`.
    fn subtree_for(&self, prefix: &str) -> Option<&Node> {
        let mut node = self.root.as_ref()?;
        let mut consumed = 0;

        while consumed < prefix.len() {
            let rest = &prefix[consumed..];
            let edge = &node.edges[node.edge_for(rest)?];
            if text::is_prefix(&edge.label, rest) {
                // The prefix ends on (or inside) this edge.
                return Some(&edge.target);
            }
            if !text::is_prefix(rest, &edge.label) {
                return None;
            }
            consumed += edge.label.len();
            node = &edge.target;
        }
        Some(node)
    }
}

impl Default for RadixTrieSet {
    fn default() -> Self {
        Self::new()
    }
}

impl StringSet for RadixTrieSet {
    fn insert(&mut self, key: &str) -> Result<InsertOutcome, SetError> {
        RadixTrieSet::insert(self, key)
    }

    fn contains(&self, key: &str) -> bool {
        RadixTrieSet::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn prefixes_of<'a>(&'a self, query: &str) -> Result<Vec<&'a str>, SetError> {
        RadixTrieSet::prefixes_of(self, query)
    }
}

impl<'a> IntoIterator for &'a RadixTrieSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sets are equal when they hold the same keys, whatever their shape.
impl PartialEq for RadixTrieSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|key| other.contains(key))
    }
}

impl Eq for RadixTrieSet {}

impl fmt::Debug for RadixTrieSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
