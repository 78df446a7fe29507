//! Partition a candidate file into the two result files

use std::path::Path;

use log::debug;

use correos::adapters::file;
use correos::core::services;
use correos::output::{OutputMode, Summary};

/// Load, classify and write, then print the summary
///
/// Results are always written to the current working directory.
pub fn partition(input: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let lines = file::load_lines(input)?;

    let result = services::partition(&lines);
    debug!(
        "Classified {} candidate(s), skipped {} blank line(s)",
        result.classified(),
        result.skipped
    );

    let written = file::write_partition(&result, Path::new("."))?;

    Summary::new(&result, &written).render(mode);
    Ok(())
}
