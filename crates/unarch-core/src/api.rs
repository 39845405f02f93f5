//! High-level public API for archive extraction.

use std::path::Path;
use std::time::Instant;

use tracing::debug;
use tracing::info;

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::formats::ArchiveFormat;
use crate::formats::ArchiveType;
use crate::formats::Strategy;
use crate::formats::TarArchive;
use crate::formats::ZipArchive;
use crate::formats::detect::detect_format;
use crate::formats::external;
use crate::types::DestDir;

/// Extracts an archive to the specified output directory.
///
/// The archive format is detected from the file's leading bytes, falling
/// back to its name. The output directory is created if it is missing.
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or its format is unknown
/// - The format has no extraction strategy
/// - I/O or an external tool fails; earlier output is left on disk
///
/// # Examples
///
/// ```no_run
/// use unarch_core::ExtractionConfig;
/// use unarch_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractionConfig::default();
/// let report = extract_archive("archive.tar.gz", "/tmp/output", &config)?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    config: &ExtractionConfig,
) -> Result<ExtractionReport> {
    extract_archive_with_progress(archive_path, output_dir, config, &mut NoopProgress)
}

/// Extracts an archive, reporting per-entry progress to `progress`.
///
/// # Errors
///
/// See [`extract_archive`].
pub fn extract_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    config: &ExtractionConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let archive_path = archive_path.as_ref();
    let format = detect_format(archive_path)?;
    extract_as(format, archive_path, output_dir, config, progress)
}

/// Extracts an archive as `format`, skipping detection.
///
/// # Errors
///
/// See [`extract_archive`].
pub fn extract_as<P: AsRef<Path>, Q: AsRef<Path>>(
    format: ArchiveType,
    archive_path: P,
    output_dir: Q,
    config: &ExtractionConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let start = Instant::now();
    let archive_path = archive_path.as_ref();
    let dest = DestDir::create(output_dir)?;
    let strategy = format.strategy();

    info!(
        archive = %archive_path.display(),
        dest = %dest.as_path().display(),
        %format,
        %strategy,
        "extracting archive"
    );

    let mut report = ExtractionReport::for_format(format);
    match strategy {
        Strategy::Container => {
            let mut handler = ZipArchive::open(archive_path)?;
            run_in_process(&mut handler, &dest, config, &mut report, progress)?;
        }
        Strategy::StreamingTar => {
            let mut handler = TarArchive::open(archive_path)?;
            run_in_process(&mut handler, &dest, config, &mut report, progress)?;
        }
        Strategy::SingleFile => {
            external::decompress_single_file(format, archive_path, &dest, config, &mut report)?;
        }
        Strategy::ExternalArchiver => {
            external::extract_with_archiver(archive_path, &dest, config)?;
        }
    }

    progress.on_complete();
    report.duration = start.elapsed();

    info!(
        files = report.files_extracted,
        directories = report.directories_created,
        skipped = report.entries_skipped,
        bytes = report.bytes_written,
        "extraction complete"
    );
    Ok(report)
}

fn run_in_process(
    handler: &mut dyn ArchiveFormat,
    dest: &DestDir,
    config: &ExtractionConfig,
    report: &mut ExtractionReport,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    debug!(handler = handler.format_name(), "decoding in process");
    handler.extract(dest, config, report, progress)
}
