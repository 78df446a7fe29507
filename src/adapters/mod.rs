//! Adapter implementations that handle I/O
//!
//! - `file/` - Loading candidate lines and writing the two result files
//!
//! Everything under `core` stays free of filesystem access.

pub mod file;
