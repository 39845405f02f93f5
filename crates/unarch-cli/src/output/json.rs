//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use unarch_core::ExtractionReport;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct ExtractionOutput {
    archive: String,
    destination: String,
    format: Option<String>,
    strategy: Option<String>,
    files_extracted: usize,
    directories_created: usize,
    entries_skipped: usize,
    bytes_written: u64,
    duration_ms: u128,
}

impl ExtractionOutput {
    fn new(archive: &Path, destination: &Path, report: &ExtractionReport) -> Self {
        Self {
            archive: archive.display().to_string(),
            destination: destination.display().to_string(),
            format: report.format.map(|f| f.to_string()),
            strategy: report.strategy.map(|s| s.to_string()),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            entries_skipped: report.entries_skipped,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_result(
        &self,
        archive: &Path,
        destination: &Path,
        report: &ExtractionReport,
    ) -> Result<()> {
        let data = ExtractionOutput::new(archive, destination, report);
        Self::output(&JsonOutput::success("extract", data))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("extract", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
