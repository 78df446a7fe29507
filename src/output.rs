//! Output formatting for human and JSON modes
//!
//! The run summary can be rendered either as the human-readable report or as
//! machine-parseable JSON.

use serde::Serialize;

use crate::adapters::file::WrittenFiles;
use crate::core::models::Partition;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of valid candidates
    pub valid: usize,
    /// Number of invalid candidates
    pub invalid: usize,
    /// Number of blank lines skipped
    pub skipped: usize,
    /// File holding the valid candidates
    pub valid_file: String,
    /// File holding the invalid candidates
    pub invalid_file: String,
}

impl Summary {
    /// Build the summary for a partition and the files it was written to
    #[must_use]
    pub fn new(partition: &Partition, files: &WrittenFiles) -> Self {
        Self {
            valid: partition.valid.len(),
            invalid: partition.invalid.len(),
            skipped: partition.skipped,
            valid_file: display_name(&files.valid),
            invalid_file: display_name(&files.invalid),
        }
    }

    /// Human-readable report, one line per entry
    #[must_use]
    pub fn human_lines(&self) -> [String; 2] {
        [
            format!("Se encontraron {} correos válidos y {} inválidos", self.valid, self.invalid),
            format!(
                "Los resultados se han guardado en '{}' y '{}'",
                self.valid_file, self.invalid_file
            ),
        ]
    }

    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for line in self.human_lines() {
            println!("{line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

// Report just the file name; the files always land in the working directory.
fn display_name(path: &std::path::Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
