//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use unarch_core::ExtractionReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    /// Report lines below the completion message.
    fn summary_lines(&self, destination: &Path, report: &ExtractionReport) -> Vec<String> {
        let mut lines = Vec::new();

        if let (Some(format), Some(strategy)) = (report.format, report.strategy) {
            lines.push(format!("  Format: {format} ({strategy})"));
        }
        lines.push(format!("  Destination: {}", destination.display()));

        // The archiver strategy reports no counts.
        if report.total_items() > 0 || report.bytes_written > 0 {
            lines.push(format!("  Files extracted: {}", report.files_extracted));
            lines.push(format!("  Directories: {}", report.directories_created));
            lines.push(format!(
                "  Total size: {}",
                Self::format_size(report.bytes_written)
            ));
        }

        if self.verbose {
            lines.push(format!("  Skipped entries: {}", report.entries_skipped));
            lines.push(format!("  Duration: {:?}", report.duration));
        }

        lines
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(
        &self,
        _archive: &Path,
        destination: &Path,
        report: &ExtractionReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            self.term.write_line(&format!(
                "{} extraction complete.",
                style("✓").green().bold()
            ))?;
        } else {
            self.term.write_line("extraction complete.")?;
        }

        for line in self.summary_lines(destination, report) {
            self.term.write_line(&line)?;
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:#}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:#}"));
        }
    }
}
