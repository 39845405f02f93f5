//! Error conversion utilities for CLI.
//!
//! Converts unarch-core's typed errors (thiserror) into user-facing
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use unarch_core::ArchiveType;
use unarch_core::ExtractionError;

/// Comma-separated list of every accepted format tag.
fn supported_tags() -> String {
    ArchiveType::ALL
        .iter()
        .map(|format| format.tag())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Converts `ExtractionError` to a user-facing anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::UnknownFormat { .. } => {
            anyhow!(
                "Unknown archive type: {}\n\
                 HINT: Use --format to name the format explicitly ({}).",
                archive.display(),
                supported_tags()
            )
        }
        ExtractionError::UnsupportedFormat(tag) => {
            anyhow!(
                "Unsupported archive type '{tag}' for '{}'\n\
                 HINT: Supported formats: {}",
                archive.display(),
                supported_tags()
            )
        }
        ExtractionError::UnsupportedCompressionType(format) => {
            anyhow!(
                "Unsupported single file compression type '{format}': {}\n\
                 HINT: Decompress it with an lzip/lzma tool directly.",
                archive.display()
            )
        }
        ExtractionError::PathTraversal { path } => {
            anyhow!(
                "Archive '{}' contains an entry outside the destination: '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                path.display()
            )
        }
        ExtractionError::OutputCollision { path } => {
            anyhow!(
                "Refusing to overwrite the source archive '{}'\n\
                 HINT: Choose a destination directory other than the one containing the archive.",
                path.display()
            )
        }
        ExtractionError::ToolNotFound { program } => {
            anyhow!(
                "External tool '{program}' not found while extracting '{}'\n\
                 HINT: Install it or make sure it is on PATH (see --archiver for 7z/rar).",
                archive.display()
            )
        }
        ExtractionError::ToolFailed { program, status } => {
            anyhow!(
                "External tool '{program}' failed on '{}': {status}",
                archive.display()
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
        ExtractionError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or malformed.",
                archive.display(),
                reason
            )
        }
    }
}

/// Adds archive context to a library result
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_path_traversal_error() {
        let err = ExtractionError::PathTraversal {
            path: PathBuf::from("../../../etc/passwd"),
        };
        let converted = convert_extraction_error(err, Path::new("malicious.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("outside the destination"));
        assert!(msg.contains("malicious.zip"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_unknown_format_lists_tags() {
        let err = ExtractionError::UnknownFormat {
            path: PathBuf::from("mystery.dat"),
        };
        let msg = convert_extraction_error(err, Path::new("mystery.dat")).to_string();
        assert!(msg.contains("Unknown archive type"));
        assert!(msg.contains("tar.zst"));
        assert!(msg.contains("7z"));
    }

    #[test]
    fn test_convert_unsupported_format() {
        let err = ExtractionError::UnsupportedFormat("cpio".to_string());
        let msg = convert_extraction_error(err, Path::new("a.cpio")).to_string();
        assert!(msg.contains("'cpio'"));
    }

    #[test]
    fn test_convert_tool_not_found() {
        let err = ExtractionError::ToolNotFound {
            program: "7z".to_string(),
        };
        let msg = convert_extraction_error(err, Path::new("a.rar")).to_string();
        assert!(msg.contains("'7z' not found"));
        assert!(msg.contains("--archiver"));
    }

    #[test]
    fn test_convert_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ExtractionError::Io(io_err);
        let converted = convert_extraction_error(err, Path::new("archive.tar.gz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("I/O error"));
    }
}
