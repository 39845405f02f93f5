//! Common trait for the native container extractors.

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::types::DestDir;

/// Trait for archive formats decoded in-process (zip and tar).
pub trait ArchiveFormat {
    /// Extracts every entry under `dest`, updating `report` as it goes.
    ///
    /// Stops at the first error; entries written before it stay on disk.
    fn extract(
        &mut self,
        dest: &DestDir,
        config: &ExtractionConfig,
        report: &mut ExtractionReport,
        progress: &mut dyn ProgressCallback,
    ) -> Result<()>;

    /// Returns the archive format name.
    fn format_name(&self) -> &str;
}
