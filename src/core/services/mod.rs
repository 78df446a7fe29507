//! Classification services
//!
//! Pure logic that operates on data passed in and returns results.
//! These services have no I/O dependencies.
//!
//! - [`validator`] - Check a string against the fixed email shape
//! - [`partitioner`] - Split candidate lines into valid and invalid lists

pub mod partitioner;
pub mod validator;

pub use partitioner::partition;
pub use validator::{EMAIL_PATTERN, classify, is_valid_email, trim_candidate};
