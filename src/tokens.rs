//! Parsing of `|`-separated token lists from the command line.

use std::ops::BitOrAssign;

/// Folds a `|`-separated token list into a flag set. Each token is
/// resolved independently and ORed into the result, so unknown tokens
/// contribute nothing and the valid ones still apply.
pub fn parse_tokens<T, F>(input: &str, mut resolve: F) -> T
where
    T: Default + BitOrAssign,
    F: FnMut(&str) -> T,
{
    let mut flags = T::default();
    for token in input.split('|') {
        flags |= resolve(token);
    }
    flags
}
