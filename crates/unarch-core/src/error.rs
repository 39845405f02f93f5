//! Error types for archive detection and extraction.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::formats::ArchiveType;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while detecting or extracting an archive.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Neither a byte signature nor a known file extension matched.
    #[error("unknown archive type: {}", path.display())]
    UnknownFormat {
        /// The file that could not be classified.
        path: PathBuf,
    },

    /// A format tag was named that no extraction strategy understands.
    #[error("unsupported archive type: {0}")]
    UnsupportedFormat(String),

    /// The format was recognized but has no single-file decompressor.
    #[error("unsupported single file compression type: {0}")]
    UnsupportedCompressionType(ArchiveType),

    /// Archive is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// An entry name resolves outside the destination directory.
    #[error("path traversal detected: {}", path.display())]
    PathTraversal {
        /// The entry name as stored in the archive.
        path: PathBuf,
    },

    /// Single-file output would overwrite the compressed source.
    #[error("output file would overwrite the source archive: {}", path.display())]
    OutputCollision {
        /// The colliding output path.
        path: PathBuf,
    },

    /// An external program could not be located.
    #[error("external tool not found: {program}")]
    ToolNotFound {
        /// Program name or path that was looked up.
        program: String,
    },

    /// An external program exited unsuccessfully.
    #[error("external tool {program} failed: {status}")]
    ToolFailed {
        /// Program that was run.
        program: String,
        /// Exit status reported by the operating system.
        status: ExitStatus,
    },
}

impl ExtractionError {
    /// Returns `true` if the archive type could not be resolved to an
    /// extraction strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use unarch_core::ExtractionError;
    ///
    /// let err = ExtractionError::UnsupportedFormat("cpio".to_string());
    /// assert!(err.is_format_error());
    /// ```
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownFormat { .. }
                | Self::UnsupportedFormat(_)
                | Self::UnsupportedCompressionType(_)
        )
    }

    /// Returns `true` if this error came from an external program.
    #[must_use]
    pub const fn is_subprocess_error(&self) -> bool {
        matches!(self, Self::ToolNotFound { .. } | Self::ToolFailed { .. })
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => Self::Io(io_err),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}
