//! Partition of candidates into valid and invalid lists

use super::Classification;

/// Candidates split by classification, each list in input order
///
/// Entries are stored trimmed. Duplicates are kept once per occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Candidates that matched the email shape
    pub valid: Vec<String>,
    /// Candidates that did not
    pub invalid: Vec<String>,
    /// Blank or whitespace-only lines that were skipped
    pub skipped: usize,
}

impl Partition {
    /// Create an empty partition
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trimmed, non-empty candidate to the list for `class`
    pub fn push(&mut self, candidate: String, class: Classification) {
        match class {
            Classification::Valid => self.valid.push(candidate),
            Classification::Invalid => self.invalid.push(candidate),
        }
    }

    /// Record a skipped blank line
    pub const fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Number of classified candidates (valid + invalid)
    #[must_use]
    pub fn classified(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Number of input lines seen, including skipped ones
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.classified() + self.skipped
    }
}
