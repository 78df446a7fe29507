//! Domain models for correos
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Classification`] - Outcome of checking one candidate
//! - [`Partition`] - Valid and invalid candidates in input order

mod classification;
mod partition;

pub use classification::Classification;
pub use partition::Partition;
