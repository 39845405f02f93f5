//! Archive format detection and extraction dispatch.
//!
//! `unarch-core` classifies an input file by its leading bytes (falling back
//! to its name) and extracts it with the matching strategy:
//!
//! - zip: decoded in-process
//! - tar, optionally wrapped in gzip/bzip2/xz/zstd: decoded in-process
//! - standalone gz/bz2/xz/zst files: external decompressor
//! - 7z and rar: external `7z` archiver
//!
//! # Examples
//!
//! ```no_run
//! use unarch_core::ExtractionConfig;
//! use unarch_core::extract_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractionConfig::default();
//! let report = extract_archive("archive.tar.gz", "/output/dir", &config)?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod formats;
pub mod report;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::extract_archive;
pub use api::extract_archive_with_progress;
pub use api::extract_as;
pub use archive::Archive;
pub use archive::ArchiveBuilder;
pub use config::ExternalTools;
pub use config::ExtractionConfig;
pub use error::ExtractionError;
pub use error::Result;
pub use formats::ArchiveType;
pub use formats::Strategy;
pub use formats::detect::detect_format;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
