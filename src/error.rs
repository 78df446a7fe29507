//! Error taxonomy for loading candidates and writing partitions
//!
//! Every variant is terminal: the CLI reports it and exits with the code
//! returned by [`PartitionError::exit_code`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the source or writing the results
#[derive(Debug, Error)]
pub enum PartitionError {
    /// The input path does not exist
    #[error("No se encontró el archivo '{}'", .0.display())]
    SourceNotFound(PathBuf),

    /// The input exists but could not be read (permissions, encoding, I/O)
    #[error("Error al leer el archivo '{}': {source}", path.display())]
    Read {
        /// Path of the input file
        path: PathBuf,
        /// Underlying cause
        source: io::Error,
    },

    /// One of the output files could not be written
    #[error("Error al guardar los resultados en '{}': {source}", path.display())]
    Write {
        /// Path of the output file that failed
        path: PathBuf,
        /// Underlying cause
        source: io::Error,
    },
}

impl PartitionError {
    /// Process exit code for this error
    ///
    /// Code 2 is left to clap for usage errors.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SourceNotFound(_) => 3,
            Self::Read { .. } => 4,
            Self::Write { .. } => 5,
        }
    }
}
