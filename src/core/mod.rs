//! Core domain logic for correos
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Classification, Partition)
//! - `services/` - Email shape check and line partitioning

pub mod models;
pub mod services;
