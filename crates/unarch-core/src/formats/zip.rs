//! ZIP archive format handler.
//!
//! ZIP keeps its central directory at the end of the file, so the reader
//! must support seeking. Entries are extracted in stored order.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::types::ArchiveEntry;
use crate::types::DestDir;
use crate::types::EntryType;

use super::common;
use super::traits::ArchiveFormat;

/// ZIP archive handler.
pub struct ZipArchive<R> {
    inner: zip::ZipArchive<R>,
}

impl ZipArchive<BufReader<File>> {
    /// Opens a ZIP file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        Self::new(BufReader::new(File::open(path)?))
    }
}

impl<R: Read + Seek> ZipArchive<R> {
    /// Reads the central directory from `reader`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArchive` if the central directory is missing or
    /// malformed.
    pub fn new(reader: R) -> Result<Self> {
        let inner = zip::ZipArchive::new(reader)?;
        debug!(entries = inner.len(), "read zip central directory");
        Ok(Self { inner })
    }
}

impl<R: Read + Seek> ArchiveFormat for ZipArchive<R> {
    fn extract(
        &mut self,
        dest: &DestDir,
        config: &ExtractionConfig,
        report: &mut ExtractionReport,
        progress: &mut dyn ProgressCallback,
    ) -> Result<()> {
        for index in 0..self.inner.len() {
            let mut file = self.inner.by_index(index)?;
            let entry = ArchiveEntry {
                path: PathBuf::from(file.name()),
                entry_type: if file.is_dir() {
                    EntryType::Directory
                } else {
                    EntryType::File
                },
                size: file.size(),
                mode: file.unix_mode(),
            };
            let target = dest.resolve(&entry.path)?;

            if entry.entry_type.is_directory() {
                common::create_directory(&target, report)?;
                continue;
            }

            debug!(entry = %entry.path.display(), size = entry.size, "zip entry");
            let mode = entry.mode.filter(|_| config.preserve_permissions);
            common::extract_file(&mut file, &target, mode, report, progress)?;
        }

        Ok(())
    }

    fn format_name(&self) -> &str {
        "zip"
    }
}
