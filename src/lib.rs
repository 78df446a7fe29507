//! correos - split a list of email addresses into valid and invalid files
//!
//! This library provides the pieces behind the `correos` CLI: loading candidate
//! lines from a text file, classifying each one against a fixed email shape,
//! and writing the two resulting partitions back to disk.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod error;
pub mod output;

pub use error::PartitionError;
