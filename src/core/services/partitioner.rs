//! Partition candidate lines by classification

use log::trace;

use super::validator::{classify, trim_candidate};
use crate::core::models::Partition;

/// Split lines into valid and invalid candidates
///
/// Each line is trimmed. Blank lines are counted as skipped and otherwise
/// ignored; every other line is classified and appended, trimmed, to the
/// matching list. Input order is preserved in both lists.
///
/// # Examples
///
/// ```
/// use correos::core::services::partition;
///
/// let p = partition(["a@b.co", "", "nope"]);
/// assert_eq!(p.valid, vec!["a@b.co"]);
/// assert_eq!(p.invalid, vec!["nope"]);
/// assert_eq!(p.skipped, 1);
/// ```
#[must_use]
pub fn partition<I, S>(lines: I) -> Partition
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = Partition::new();

    for (index, line) in lines.into_iter().enumerate() {
        let candidate = trim_candidate(line.as_ref());
        if candidate.is_empty() {
            result.skip();
            continue;
        }

        let class = classify(candidate);
        trace!("line {}: {candidate:?} is {class}", index + 1);
        result.push(candidate.to_string(), class);
    }

    result
}
