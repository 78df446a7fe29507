//! Candidate source loading

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::PartitionError;

/// Read every line of a UTF-8 text file
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and a final line break does
/// not produce an extra empty line. The file is fully read and closed before returning.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>, PartitionError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            PartitionError::SourceNotFound(path.to_path_buf())
        } else {
            PartitionError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let lines = split_lines(&content);
    debug!("Loaded {} line(s) from {}", lines.len(), path.display());
    Ok(lines)
}

// Universal newlines: `\r\n` and lone `\r` are folded into `\n` first.
fn split_lines(content: &str) -> Vec<String> {
    content.replace("\r\n", "\n").replace('\r', "\n").lines().map(str::to_string).collect()
}
