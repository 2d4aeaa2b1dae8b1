//! The string-set interface shared by all backends.

use std::collections::BTreeSet;

use crate::error::{require_non_empty, SetError};
use crate::text::try_to_owned;

/// Result of a successful insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertOutcome {
    /// The key was added.
    Inserted,
    /// The key was already a member; nothing changed.
    AlreadyPresent,
}

impl InsertOutcome {
    /// Returns true if the insertion added a key.
    pub fn is_inserted(self) -> bool {
        self == InsertOutcome::Inserted
    }
}

/// A collection of unique, non-empty strings with prefix-family queries.
///
/// Backends are interchangeable: code written against this trait works with
/// [`RadixTrieSet`](crate::RadixTrieSet) or with a plain `BTreeSet<String>`.
/// Releasing a set is its `Drop`.
pub trait StringSet {
    /// Adds `key` to the set.
    ///
    /// # Errors
    /// `InvalidArgument` if `key` is empty, `AllocationFailure` if memory
    /// runs out. A failed insertion leaves the set unchanged.
    fn insert(&mut self, key: &str) -> Result<InsertOutcome, SetError>;

    /// Returns true if `key` is a member.
    fn contains(&self, key: &str) -> bool;

    /// Returns the number of members.
    fn len(&self) -> usize;

    /// Returns true if the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the members that are prefixes of `query`, shortest first.
    ///
    /// # Errors
    /// `InvalidArgument` if `query` is empty.
    fn prefixes_of<'a>(&'a self, query: &str) -> Result<Vec<&'a str>, SetError>;
}

impl StringSet for BTreeSet<String> {
    fn insert(&mut self, key: &str) -> Result<InsertOutcome, SetError> {
        require_non_empty(key, "key")?;
        if BTreeSet::contains(self, key) {
            return Ok(InsertOutcome::AlreadyPresent);
        }
        BTreeSet::insert(self, try_to_owned(key)?);
        Ok(InsertOutcome::Inserted)
    }

    fn contains(&self, key: &str) -> bool {
        !key.is_empty() && BTreeSet::contains(self, key)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn prefixes_of<'a>(&'a self, query: &str) -> Result<Vec<&'a str>, SetError> {
        require_non_empty(query, "query")?;
        // Probe every non-empty prefix of the query, shortest first.
        Ok(query
            .char_indices()
            .skip(1)
            .map(|(end, _)| end)
            .chain(Some(query.len()))
            .filter_map(|end| self.get(&query[..end]).map(String::as_str))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RadixTrieSet;

    fn exercise<S: StringSet>(set: &mut S) {
        assert!(set.is_empty());
        for key in ["team", "tea", "boat", "bo"] {
            assert_eq!(set.insert(key), Ok(InsertOutcome::Inserted));
        }
        assert_eq!(set.insert("tea"), Ok(InsertOutcome::AlreadyPresent));
        assert_eq!(set.insert(""), Err(SetError::InvalidArgument("key")));
        assert_eq!(set.len(), 4);

        assert!(set.contains("tea"));
        assert!(!set.contains("te"));
        assert!(!set.contains(""));

        assert_eq!(set.prefixes_of("teams").unwrap(), vec!["tea", "team"]);
        assert_eq!(set.prefixes_of("boa").unwrap(), vec!["bo"]);
        assert_eq!(set.prefixes_of("t").unwrap(), Vec::<&str>::new());
        assert_eq!(set.prefixes_of(""), Err(SetError::InvalidArgument("query")));
    }

    #[test]
    fn test_radix_trie_backend() {
        exercise(&mut RadixTrieSet::new());
    }

    #[test]
    fn test_btree_backend() {
        exercise(&mut BTreeSet::<String>::new());
    }

    #[test]
    fn test_btree_prefixes_multibyte() {
        let mut set: BTreeSet<String> = BTreeSet::new();
        StringSet::insert(&mut set, "é").unwrap();
        StringSet::insert(&mut set, "été").unwrap();
        assert_eq!(StringSet::prefixes_of(&set, "étés").unwrap(), vec!["é", "été"]);
    }

    #[test]
    fn test_insert_outcome() {
        assert!(InsertOutcome::Inserted.is_inserted());
        assert!(!InsertOutcome::AlreadyPresent.is_inserted());
    }
}
