//! Archive entry metadata.

use std::path::PathBuf;

/// Type of entry in a container archive.
///
/// Only files and directories are materialized on disk; every other kind is
/// skipped by the extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Regular file entry.
    File,

    /// Directory entry.
    Directory,

    /// Symbolic link entry.
    Symlink,

    /// Hard link entry.
    Hardlink,

    /// Device nodes, FIFOs, extension headers and anything else.
    Other,
}

impl EntryType {
    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl From<tar::EntryType> for EntryType {
    /// Only `Regular` counts as a file; contiguous files land in `Other`.
    fn from(kind: tar::EntryType) -> Self {
        match kind {
            tar::EntryType::Regular => Self::File,
            tar::EntryType::Directory => Self::Directory,
            tar::EntryType::Symlink => Self::Symlink,
            tar::EntryType::Link => Self::Hardlink,
            _ => Self::Other,
        }
    }
}

/// A logical record read from a container archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name as stored in the archive (relative, possibly nested).
    pub path: PathBuf,

    /// Kind of entry.
    pub entry_type: EntryType,

    /// Uncompressed size in bytes.
    pub size: u64,

    /// Stored Unix permission bits, if the archive records them.
    pub mode: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_predicates() {
        assert!(EntryType::Directory.is_directory());
        assert!(!EntryType::File.is_directory());
        assert!(!EntryType::Symlink.is_directory());
    }

    #[test]
    fn test_from_tar_entry_type() {
        assert_eq!(EntryType::from(tar::EntryType::Regular), EntryType::File);
        assert_eq!(EntryType::from(tar::EntryType::Directory), EntryType::Directory);
        assert_eq!(EntryType::from(tar::EntryType::Symlink), EntryType::Symlink);
        assert_eq!(EntryType::from(tar::EntryType::Link), EntryType::Hardlink);
        assert_eq!(EntryType::from(tar::EntryType::Continuous), EntryType::Other);
        assert_eq!(EntryType::from(tar::EntryType::Fifo), EntryType::Other);
        assert_eq!(EntryType::from(tar::EntryType::XGlobalHeader), EntryType::Other);
    }
}
