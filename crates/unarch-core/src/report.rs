//! Extraction operation reporting.

use std::path::Path;
use std::time::Duration;

use crate::formats::ArchiveType;
use crate::formats::Strategy;

/// Report of an archive extraction operation.
///
/// The external-process strategies cannot see individual entries, so for
/// 7z and rar only `format`, `strategy` and `duration` are meaningful.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Detected (or forced) archive type.
    pub format: Option<ArchiveType>,

    /// Strategy that performed the extraction.
    pub strategy: Option<Strategy>,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Entries not reproduced on disk (symlinks, devices, ...).
    pub entries_skipped: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction operation.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty report for the given format.
    #[must_use]
    pub fn for_format(format: ArchiveType) -> Self {
        Self {
            format: Some(format),
            strategy: Some(format.strategy()),
            ..Self::default()
        }
    }

    /// Returns total number of items materialized on disk.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}

/// Callback trait for progress reporting during extraction.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use unarch_core::ProgressCallback;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, path: &Path) {
///         println!("extracting {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback {
    /// Called before an entry is written.
    fn on_entry_start(&mut self, path: &Path);

    /// Called after an entry's bytes were written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called once an entry has been fully processed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called when the whole extraction has finished successfully.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report() {
        let report = ExtractionReport::new();
        assert_eq!(report.files_extracted, 0);
        assert_eq!(report.bytes_written, 0);
        assert!(report.format.is_none());
    }

    #[test]
    fn test_for_format() {
        let report = ExtractionReport::for_format(ArchiveType::TarXz);
        assert_eq!(report.format, Some(ArchiveType::TarXz));
        assert_eq!(report.strategy, Some(Strategy::StreamingTar));
    }

    #[test]
    fn test_total_items() {
        let mut report = ExtractionReport::new();
        report.files_extracted = 10;
        report.directories_created = 5;
        report.entries_skipped = 3;
        assert_eq!(report.total_items(), 15);
    }
}
