//! Archive format detection.
//!
//! Classification reads a short prefix of the file and matches it against
//! known byte signatures. Only when no signature matches is the file name
//! consulted. A gzip, bzip2, xz or zstd prefix always resolves to the
//! tar-wrapped variant; the standalone single-file tags are reachable only
//! through the extension fallback.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::ExtractionError;
use crate::Result;

/// Number of leading bytes read for signature matching.
pub const SIGNATURE_LEN: usize = 16;

/// Byte signatures checked in priority order.
const SIGNATURES: &[(&[u8], ArchiveType)] = &[
    (b"PK", ArchiveType::Zip),
    (&[0x1F, 0x8B], ArchiveType::TarGz),
    (&[0x42, 0x5A, 0x68], ArchiveType::TarBz2),
    (&[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00], ArchiveType::TarXz),
    (&[0x52, 0x61, 0x72, 0x21], ArchiveType::Rar),
    (&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C], ArchiveType::SevenZ),
    (&[0x28, 0xB5, 0x2F, 0xFD], ArchiveType::TarZst),
];

/// File name suffixes, compound suffixes first.
const EXTENSIONS: &[(&str, ArchiveType)] = &[
    (".tar.lzma", ArchiveType::TarLzma),
    (".tar.lz", ArchiveType::TarLz),
    (".gz", ArchiveType::Gz),
    (".bz2", ArchiveType::Bz2),
    (".xz", ArchiveType::Xz),
    (".lzma", ArchiveType::Lzma),
    (".lz", ArchiveType::Lz),
    (".zst", ArchiveType::Zst),
    (".tar", ArchiveType::Tar),
];

/// Supported archive and compression formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveType {
    /// Tar archive (uncompressed).
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
    /// Bzip2-compressed tar archive.
    TarBz2,
    /// XZ-compressed tar archive.
    TarXz,
    /// Lzip-compressed tar archive.
    TarLz,
    /// LZMA-compressed tar archive.
    TarLzma,
    /// Zstd-compressed tar archive.
    TarZst,
    /// Single gzip-compressed file.
    Gz,
    /// Single bzip2-compressed file.
    Bz2,
    /// Single xz-compressed file.
    Xz,
    /// Single lzip-compressed file.
    Lz,
    /// Single LZMA-compressed file.
    Lzma,
    /// Single zstd-compressed file.
    Zst,
    /// ZIP archive.
    Zip,
    /// 7z archive.
    SevenZ,
    /// RAR archive.
    Rar,
}

/// How an archive type is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Random-access container decoding (zip).
    Container,
    /// Sequential tar parsing behind an optional decompression filter.
    StreamingTar,
    /// External decompressor producing one output file.
    SingleFile,
    /// External general-purpose archiver.
    ExternalArchiver,
}

impl ArchiveType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Tar,
        Self::TarGz,
        Self::TarBz2,
        Self::TarXz,
        Self::TarLz,
        Self::TarLzma,
        Self::TarZst,
        Self::Gz,
        Self::Bz2,
        Self::Xz,
        Self::Lz,
        Self::Lzma,
        Self::Zst,
        Self::Zip,
        Self::SevenZ,
        Self::Rar,
    ];

    /// Returns the canonical tag string.
    ///
    /// # Examples
    ///
    /// ```
    /// use unarch_core::formats::ArchiveType;
    ///
    /// assert_eq!(ArchiveType::TarGz.tag(), "tar.gz");
    /// assert_eq!(ArchiveType::SevenZ.tag(), "7z");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
            Self::TarBz2 => "tar.bz2",
            Self::TarXz => "tar.xz",
            Self::TarLz => "tar.lz",
            Self::TarLzma => "tar.lzma",
            Self::TarZst => "tar.zst",
            Self::Gz => "gz",
            Self::Bz2 => "bz2",
            Self::Xz => "xz",
            Self::Lz => "lz",
            Self::Lzma => "lzma",
            Self::Zst => "zst",
            Self::Zip => "zip",
            Self::SevenZ => "7z",
            Self::Rar => "rar",
        }
    }

    /// Returns the extraction strategy for this format.
    #[must_use]
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::Zip => Strategy::Container,
            Self::Tar
            | Self::TarGz
            | Self::TarBz2
            | Self::TarXz
            | Self::TarLz
            | Self::TarLzma
            | Self::TarZst => Strategy::StreamingTar,
            Self::Gz | Self::Bz2 | Self::Xz | Self::Lz | Self::Lzma | Self::Zst => {
                Strategy::SingleFile
            }
            Self::SevenZ | Self::Rar => Strategy::ExternalArchiver,
        }
    }
}

impl fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ArchiveType {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExtractionError::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Container => "container",
            Self::StreamingTar => "streaming-tar",
            Self::SingleFile => "single-file",
            Self::ExternalArchiver => "external-archiver",
        };
        f.write_str(name)
    }
}

/// Detects the archive type of a file.
///
/// Reads up to [`SIGNATURE_LEN`] bytes; files shorter than that are fine.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read, and
/// `UnknownFormat` if neither the signature nor the file name match.
pub fn detect_format(path: &Path) -> Result<ArchiveType> {
    let mut file = File::open(path)?;
    let prefix = read_prefix(&mut file, SIGNATURE_LEN)?;

    if let Some(format) = detect_from_magic(&prefix) {
        debug!(path = %path.display(), %format, "matched byte signature");
        return Ok(format);
    }

    let format = detect_from_extension(path).ok_or_else(|| ExtractionError::UnknownFormat {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), %format, "matched file extension");
    Ok(format)
}

/// Matches a byte prefix against the known signatures.
///
/// # Examples
///
/// ```
/// use unarch_core::formats::ArchiveType;
/// use unarch_core::formats::detect::detect_from_magic;
///
/// assert_eq!(detect_from_magic(b"PK\x03\x04"), Some(ArchiveType::Zip));
/// assert_eq!(detect_from_magic(b"P"), None);
/// ```
#[must_use]
pub fn detect_from_magic(prefix: &[u8]) -> Option<ArchiveType> {
    SIGNATURES
        .iter()
        .find(|(magic, _)| prefix.starts_with(magic))
        .map(|&(_, format)| format)
}

/// Maps a file name suffix to an archive type.
///
/// Matching is on the raw name bytes, so names that are not valid UTF-8
/// still resolve by their suffix.
#[must_use]
pub fn detect_from_extension(path: &Path) -> Option<ArchiveType> {
    let name = path.file_name()?.as_encoded_bytes().to_ascii_lowercase();
    EXTENSIONS
        .iter()
        .find(|(suffix, _)| name.ends_with(suffix.as_bytes()))
        .map(|&(_, format)| format)
}

/// Reads up to `len` bytes, stopping early at end of file.
pub(crate) fn read_prefix<R: Read>(reader: &mut R, len: usize) -> std::io::Result<Vec<u8>> {
    let mut prefix = Vec::with_capacity(len);
    reader.take(len as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}
