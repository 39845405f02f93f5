//! Extraction helpers shared by the zip and tar strategies.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;

/// Buffer size for output files (64KB).
const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Writes one regular-file entry to `target`.
///
/// Parent directories are created first. An existing file at `target` is
/// replaced, so re-running an extraction into the same destination works
/// even when a previous run left read-only files behind.
///
/// `mode` is applied after the data is written (Unix only).
pub fn extract_file<R: Read>(
    reader: &mut R,
    target: &Path,
    mode: Option<u32>,
    report: &mut ExtractionReport,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    if let Some(parent) = target.parent() {
        create_dir_all(parent)?;
    }

    if target.symlink_metadata().is_ok_and(|meta| !meta.is_dir()) {
        std::fs::remove_file(target)?;
    }

    progress.on_entry_start(target);

    let output_file = File::create(target)?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, output_file);
    let bytes_written = std::io::copy(reader, &mut writer)?;
    writer.flush()?;
    drop(writer);

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(target, std::fs::Permissions::from_mode(mode & 0o777))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    debug!(path = %target.display(), bytes = bytes_written, "extracted file");

    report.files_extracted += 1;
    report.bytes_written += bytes_written;
    progress.on_bytes_written(bytes_written);
    progress.on_entry_complete(target);

    Ok(())
}

/// Creates a directory entry.
///
/// Idempotent: an already existing directory is not an error.
pub fn create_directory(target: &Path, report: &mut ExtractionReport) -> Result<()> {
    create_dir_all(target)?;
    debug!(path = %target.display(), "created directory");
    report.directories_created += 1;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::NoopProgress;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_extract_file_creates_parents() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = temp.path().join("a/b/c.txt");
        let mut report = ExtractionReport::new();

        extract_file(
            &mut Cursor::new(b"nested"),
            &target,
            None,
            &mut report,
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"nested");
        assert_eq!(report.files_extracted, 1);
        assert_eq!(report.bytes_written, 6);
    }

    #[test]
    #[cfg(unix)]
    fn test_extract_file_replaces_read_only_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("failed to create temp dir");
        let target = temp.path().join("ro.txt");
        let mut report = ExtractionReport::new();

        for content in [&b"first"[..], &b"second"[..]] {
            extract_file(
                &mut Cursor::new(content),
                &target,
                Some(0o444),
                &mut report,
                &mut NoopProgress,
            )
            .unwrap();
        }

        assert_eq!(std::fs::read(&target).unwrap(), b"second");
        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o444);
    }

    #[test]
    fn test_create_directory_idempotent() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = temp.path().join("x/y");
        let mut report = ExtractionReport::new();

        create_directory(&target, &mut report).unwrap();
        create_directory(&target, &mut report).unwrap();

        assert!(target.is_dir());
        assert_eq!(report.directories_created, 2);
    }
}
