//! Archive handle and extraction builder.

use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::formats::ArchiveType;
use crate::formats::detect::detect_format;

/// An archive file whose format has been determined.
#[derive(Debug, Clone)]
pub struct Archive {
    path: PathBuf,
    format: ArchiveType,
}

impl Archive {
    /// Opens an archive and classifies it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its format is unknown.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = detect_format(&path)?;
        Ok(Self { path, format })
    }

    /// Wraps an archive whose format is already known.
    #[must_use]
    pub fn with_format<P: AsRef<Path>>(path: P, format: ArchiveType) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    /// Returns the path to the archive file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the archive format.
    #[must_use]
    pub fn format(&self) -> ArchiveType {
        self.format
    }

    /// Extracts the archive to the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction fails.
    pub fn extract<P: AsRef<Path>>(
        &self,
        output_dir: P,
        config: &ExtractionConfig,
    ) -> Result<ExtractionReport> {
        self.extract_with_progress(output_dir, config, &mut NoopProgress)
    }

    /// Extracts the archive, reporting progress.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction fails.
    pub fn extract_with_progress<P: AsRef<Path>>(
        &self,
        output_dir: P,
        config: &ExtractionConfig,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        crate::api::extract_as(self.format, &self.path, output_dir, config, progress)
    }
}

/// Builder for configuring archive extraction.
///
/// # Examples
///
/// ```no_run
/// use unarch_core::ArchiveBuilder;
/// use unarch_core::ExtractionConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = ArchiveBuilder::new("archive.tar.gz")
///     .output_dir("/tmp/output")
///     .config(ExtractionConfig::default().with_preserve_permissions(false))
///     .extract()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ArchiveBuilder {
    archive_path: PathBuf,
    output_dir: PathBuf,
    format: Option<ArchiveType>,
    config: ExtractionConfig,
}

impl ArchiveBuilder {
    /// Creates a builder that extracts `archive` into the current directory.
    #[must_use]
    pub fn new<P: AsRef<Path>>(archive: P) -> Self {
        Self {
            archive_path: archive.as_ref().to_path_buf(),
            output_dir: PathBuf::from("."),
            format: None,
            config: ExtractionConfig::default(),
        }
    }

    /// Sets the output directory.
    #[must_use]
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// Forces a format instead of detecting one.
    #[must_use]
    pub fn format(mut self, format: Option<ArchiveType>) -> Self {
        self.format = format;
        self
    }

    /// Sets the extraction configuration.
    #[must_use]
    pub fn config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the extraction.
    ///
    /// # Errors
    ///
    /// Returns an error if detection or extraction fails.
    pub fn extract(self) -> Result<ExtractionReport> {
        self.extract_with_progress(&mut NoopProgress)
    }

    /// Runs the extraction, reporting progress.
    ///
    /// # Errors
    ///
    /// Returns an error if detection or extraction fails.
    pub fn extract_with_progress(
        self,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        let archive = match self.format {
            Some(format) => Archive::with_format(&self.archive_path, format),
            None => Archive::open(&self.archive_path)?,
        };
        archive.extract_with_progress(&self.output_dir, &self.config, progress)
    }
}
