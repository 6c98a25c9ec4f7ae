//! Prefix key derivation for customer name search.
//!
//! # Responsibility
//! - Turn free-form user input into the pair of prefix keys matched against
//!   `first_name` and `last_name`.
//!
//! # Invariants
//! - At most the first two whitespace-separated tokens are used; anything
//!   after them is ignored.
//! - Only the first character of each token is upper-cased; the remainder is
//!   left untouched. `"mcdonald"` derives `"Mcdonald"`, not `"McDonald"`.
//! - A single-token query reuses the first key for the last-name column.

/// Derived prefix keys for the two name columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePrefixes {
    /// Matched as a prefix of `first_name`.
    pub first: String,
    /// Matched as a prefix of `last_name`.
    pub last: String,
}

/// Derives prefix keys from raw query text.
///
/// Returns `None` when the input contains no tokens; callers decide how to
/// surface that.
///
/// Tokens with a non-alphabetic first character pass through unchanged, and
/// LIKE wildcard characters are not escaped, matching the historical search
/// behavior callers depend on.
pub fn derive_name_prefixes(raw: &str) -> Option<NamePrefixes> {
    let mut tokens = raw.split_whitespace();
    let first = capitalize_first(tokens.next()?);
    let last = match tokens.next() {
        Some(token) => capitalize_first(token),
        None => first.clone(),
    };
    Some(NamePrefixes { first, last })
}

/// Upper-cases the first character only.
///
/// Unicode uppercasing may expand one character to several (`ß` -> `SS`);
/// the expansion is kept as-is.
fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
