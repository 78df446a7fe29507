//! Command implementations

mod partition;

pub use partition::partition;
