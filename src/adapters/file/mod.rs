//! Filesystem adapter
//!
//! Reads the candidate list and writes the partition to the fixed output
//! files `correos_validos.txt` and `correos_invalidos.txt`.

mod results;
mod source;

pub use results::{INVALID_FILE, VALID_FILE, WrittenFiles, write_partition};
pub use source::load_lines;
