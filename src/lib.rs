//! # `radix-strset` - String Sets with Prefix-Family Queries
//!
//! A set of unique, non-empty strings that answers two questions:
//! - is this exact string a member?
//! - which members are prefixes of this string?
//!
//! The second query is what tokenizers, routing tables and dictionary
//! segmenters need, and it is where a compressed prefix tree shines: the
//! answer is found in a single walk whose cost depends on the query length
//! only.
//!
//! ## Architecture
//!
//! 1. **`StringSet`**: the backend-independent interface (insert, contains,
//!    len, `prefixes_of`). Implemented by [`RadixTrieSet`] and by
//!    `BTreeSet<String>`, so backends can be swapped without touching call
//!    sites.
//!
//! 2. **`RadixTrieSet`**: a radix trie whose edges carry string labels.
//!    - Nodes own their edges and edges own their child by value; the
//!      structure is a tree by construction.
//!    - Sibling labels start with distinct characters, so every walk is a
//!      single pass with no backtracking.
//!    - Insertions reserve all memory before mutating, so an allocation
//!      failure leaves the set untouched.
//!    - Teardown uses an explicit work-list, so dropping a very deep trie
//!      cannot overflow the stack.
//!
//! 3. **Diagnostics**: [`RadixTrieSet::verify`] checks the structural
//!    invariants, [`RadixTrieSet::stats`] reports the shape, and the
//!    `tracing` feature emits events on splits and failures.
//!
//! ## Example
//!
//! ```rust
//! use radix_strset::{RadixTrieSet, StringSet};
//!
//! fn load<S: StringSet>(set: &mut S) {
//!     for word in ["team", "tea", "boat", "bo"] {
//!         set.insert(word).unwrap();
//!     }
//! }
//!
//! let mut set = RadixTrieSet::new();
//! load(&mut set);
//!
//! assert_eq!(set.len(), 4);
//! assert!(set.contains("tea"));
//! assert!(!set.contains("te"));
//! assert_eq!(set.prefixes_of("teammate").unwrap(), vec!["tea", "team"]);
//! assert_eq!(set.keys_with_prefix("bo").unwrap().len(), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![forbid(unsafe_code)]

pub mod error;
pub mod set;
pub mod text;
pub mod trie;

pub use error::SetError;
pub use set::{InsertOutcome, StringSet};
pub use trie::{InvariantViolation, Iter, PathKeys, RadixTrieSet, TrieStats};

// Compile-time assertions on the public types.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RadixTrieSet>();
    assert_send_sync::<SetError>();
};
