//! Tar archive format handler.
//!
//! The decompression filter is chosen from the first bytes of the file, not
//! from the detected archive type, so a mislabelled input still decodes.
//! Only regular files and directories are reproduced on disk. File contents
//! are copied as-is; stored permission modes are not applied.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

use tracing::debug;

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::types::ArchiveEntry;
use crate::types::DestDir;
use crate::types::EntryType;

use super::common;
use super::compression::CompressionCodec;
use super::compression::FILTER_PREFIX_LEN;
use super::detect::read_prefix;
use super::traits::ArchiveFormat;

/// Tar archive handler over an already-decompressed byte stream.
pub struct TarArchive<R: Read> {
    archive: tar::Archive<R>,
    codec: Option<CompressionCodec>,
}

impl TarArchive<Box<dyn Read>> {
    /// Opens a tar file, wrapping it in the decoder its magic bytes call for.
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path)?;
        let prefix = read_prefix(&mut file, FILTER_PREFIX_LEN)?;
        file.seek(SeekFrom::Start(0))?;

        let codec = CompressionCodec::from_magic(&prefix);
        let reader = BufReader::new(file);
        let stream: Box<dyn Read> = match codec {
            Some(codec) => codec.decoder(reader)?,
            None => Box::new(reader),
        };

        debug!(
            path = %path.display(),
            filter = codec.map_or("none", CompressionCodec::name),
            "opened tar stream"
        );

        Ok(Self {
            archive: tar::Archive::new(stream),
            codec,
        })
    }
}

impl<R: Read> TarArchive<R> {
    /// Wraps an uncompressed tar stream.
    pub fn new(reader: R) -> Self {
        Self {
            archive: tar::Archive::new(reader),
            codec: None,
        }
    }
}

impl<R: Read> ArchiveFormat for TarArchive<R> {
    fn extract(
        &mut self,
        dest: &DestDir,
        _config: &ExtractionConfig,
        report: &mut ExtractionReport,
        progress: &mut dyn ProgressCallback,
    ) -> Result<()> {
        for entry in self.archive.entries()? {
            let mut entry = entry?;
            let header = entry.header();
            let meta = ArchiveEntry {
                entry_type: EntryType::from(header.entry_type()),
                mode: header.mode().ok(),
                size: entry.size(),
                path: entry.path()?.into_owned(),
            };

            match meta.entry_type {
                EntryType::Directory => {
                    common::create_directory(&dest.resolve(&meta.path)?, report)?;
                }
                EntryType::File => {
                    let target = dest.resolve(&meta.path)?;
                    common::extract_file(&mut entry, &target, None, report, progress)?;
                }
                EntryType::Symlink | EntryType::Hardlink | EntryType::Other => {
                    debug!(
                        entry = %meta.path.display(),
                        kind = ?meta.entry_type,
                        "skipping unsupported tar entry"
                    );
                    report.entries_skipped += 1;
                }
            }
        }

        Ok(())
    }

    fn format_name(&self) -> &str {
        self.codec.map_or("tar", |codec| match codec {
            CompressionCodec::Gzip => "tar.gz",
            CompressionCodec::Bzip2 => "tar.bz2",
            CompressionCodec::Xz => "tar.xz",
            CompressionCodec::Zstd => "tar.zst",
        })
    }
}
