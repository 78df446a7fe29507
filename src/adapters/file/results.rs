//! Result file writing

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::Partition;
use crate::error::PartitionError;

/// File name for candidates that matched the email shape
pub const VALID_FILE: &str = "correos_validos.txt";

/// File name for candidates that did not
pub const INVALID_FILE: &str = "correos_invalidos.txt";

/// Paths of the two files written by [`write_partition`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    /// Path of the valid list
    pub valid: PathBuf,
    /// Path of the invalid list
    pub invalid: PathBuf,
}

/// Write both lists of `partition` into `dir`
///
/// Entries are joined with a single `\n` and no trailing newline. Existing
/// files are overwritten. The valid file is written first; if the invalid
/// file then fails, the valid file is left in place.
pub fn write_partition(partition: &Partition, dir: &Path) -> Result<WrittenFiles, PartitionError> {
    let valid = dir.join(VALID_FILE);
    let invalid = dir.join(INVALID_FILE);

    write_entries(&valid, &partition.valid)?;
    write_entries(&invalid, &partition.invalid)?;

    Ok(WrittenFiles { valid, invalid })
}

fn write_entries(path: &Path, entries: &[String]) -> Result<(), PartitionError> {
    fs::write(path, entries.join("\n")).map_err(|source| PartitionError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} entr(ies) to {}", entries.len(), path.display());
    Ok(())
}
