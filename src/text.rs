//! String helpers used by the trie walk.
//!
//! All offsets are byte offsets into UTF-8 text and always fall on `char`
//! boundaries, so slicing with them never panics.

use crate::error::SetError;

/// Returns the byte length of the longest common prefix of `a` and `b`.
///
/// The comparison is done per `char`, so the result is always a valid split
/// point for both strings.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}

/// Returns the part of `word` that follows `prefix`, or `None` if `prefix`
/// is not a prefix of `word`.
pub fn rest<'a>(word: &'a str, prefix: &str) -> Option<&'a str> {
    word.strip_prefix(prefix)
}

/// Returns `true` if `prefix` is a prefix of `word`.
#[inline]
pub fn is_prefix(word: &str, prefix: &str) -> bool {
    word.starts_with(prefix)
}

/// Returns the first `char` of `s`, if any.
#[inline]
pub fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Copies `s` into a new `String`, reporting allocation failure instead of
/// aborting.
///
/// # Errors
/// Returns `AllocationFailure` if the copy cannot be allocated.
pub fn try_to_owned(s: &str) -> Result<String, SetError> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}
