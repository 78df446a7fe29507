//! Email shape validator
//!
//! A purely syntactic check: the whole trimmed candidate must be
//!
//! ```text
//! local@domain.tld
//! ```
//!
//! where `local` is one or more of `A-Z a-z 0-9 . _ % + -`, `domain` is one or
//! more of `A-Z a-z 0-9 . -`, and `tld` is at least two ASCII letters.
//!
//! Consecutive dots, quoted local parts and non-ASCII addresses are not
//! handled specially; the shape is all that is checked.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Classification;

/// The accepted email shape, anchored at both ends
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Strip leading and trailing whitespace from a candidate
///
/// Besides Unicode whitespace this also strips the ASCII separators
/// `\x1c`..=`\x1f` (file, group, record and unit separator).
///
/// # Examples
///
/// ```
/// use correos::core::services::trim_candidate;
///
/// assert_eq!(trim_candidate("\u{1c} user@example.com\t"), "user@example.com");
/// ```
#[must_use]
pub fn trim_candidate(candidate: &str) -> &str {
    candidate.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Check whether `candidate` has the accepted email shape
///
/// Leading and trailing whitespace (see [`trim_candidate`]) is ignored.
/// Internal whitespace makes the candidate invalid.
///
/// # Examples
///
/// ```
/// use correos::core::services::is_valid_email;
///
/// assert!(is_valid_email(" user@example.com "));
/// assert!(!is_valid_email("user@example.c"));
/// ```
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(trim_candidate(candidate))
}

/// Classify a candidate as valid or invalid
#[must_use]
pub fn classify(candidate: &str) -> Classification {
    Classification::from(is_valid_email(candidate))
}
