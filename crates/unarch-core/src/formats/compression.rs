//! Compression codec support.
//!
//! The streaming tar strategy wraps its input in one of these decoders, and
//! the single-file strategy maps each codec to an external decompressor.
//!
//! # Supported Codecs
//!
//! - **Gzip** (.tar.gz, .gz)
//! - **Bzip2** (.tar.bz2, .bz2)
//! - **Xz** (.tar.xz, .xz)
//! - **Zstd** (.tar.zst, .zst)

use std::io::BufReader;
use std::io::Read;

use crate::Result;
use crate::config::ExternalTools;
use crate::formats::ArchiveType;

/// Bytes inspected when choosing a decompression filter.
pub const FILTER_PREFIX_LEN: usize = 6;

/// Compression codec wrapping a tar stream or a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionCodec {
    /// Gzip compression (deflate algorithm).
    Gzip,
    /// Bzip2 compression (Burrows-Wheeler algorithm).
    Bzip2,
    /// Xz compression (LZMA2 algorithm).
    Xz,
    /// Zstd compression (Zstandard algorithm).
    Zstd,
}

impl CompressionCodec {
    /// Every codec, in the order filters are probed.
    pub const ALL: [Self; 4] = [Self::Gzip, Self::Bzip2, Self::Xz, Self::Zstd];

    /// Returns the magic bytes that open a stream of this codec.
    #[must_use]
    pub const fn magic(self) -> &'static [u8] {
        match self {
            Self::Gzip => &[0x1F, 0x8B],
            Self::Bzip2 => &[0x42, 0x5A, 0x68],
            Self::Xz => &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00],
            Self::Zstd => &[0x28, 0xB5, 0x2F, 0xFD],
        }
    }

    /// Returns a human-readable name for this codec.
    ///
    /// # Examples
    ///
    /// ```
    /// use unarch_core::formats::compression::CompressionCodec;
    ///
    /// assert_eq!(CompressionCodec::Gzip.name(), "gzip");
    /// assert_eq!(CompressionCodec::Zstd.name(), "zstd");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
        }
    }

    /// Picks the codec whose magic bytes open `prefix`.
    ///
    /// Returns `None` for plain (uncompressed) data.
    #[must_use]
    pub fn from_magic(prefix: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|codec| prefix.starts_with(codec.magic()))
    }

    /// Returns the codec of a standalone compressed file.
    ///
    /// Formats without a native codec here (`lz`, `lzma`) and all archive
    /// formats return `None`.
    #[must_use]
    pub const fn for_single_file(format: ArchiveType) -> Option<Self> {
        match format {
            ArchiveType::Gz => Some(Self::Gzip),
            ArchiveType::Bz2 => Some(Self::Bzip2),
            ArchiveType::Xz => Some(Self::Xz),
            ArchiveType::Zst => Some(Self::Zstd),
            _ => None,
        }
    }

    /// Returns the configured program that decompresses this codec to stdout.
    #[must_use]
    pub fn decompressor(self, tools: &ExternalTools) -> &str {
        match self {
            Self::Gzip => tools.gunzip.as_str(),
            Self::Bzip2 => tools.bunzip2.as_str(),
            Self::Xz => tools.unxz.as_str(),
            Self::Zstd => tools.unzstd.as_str(),
        }
    }

    /// Wraps `reader` in a streaming decoder for this codec.
    ///
    /// Gzip and bzip2 accept concatenated members, matching what the
    /// command-line tools do.
    pub fn decoder<'a, R: Read + 'a>(self, reader: R) -> Result<Box<dyn Read + 'a>> {
        let decoder: Box<dyn Read + 'a> = match self {
            Self::Gzip => Box::new(flate2::read::MultiGzDecoder::new(reader)),
            Self::Bzip2 => Box::new(bzip2::read::MultiBzDecoder::new(reader)),
            Self::Xz => Box::new(xz2::read::XzDecoder::new_multi_decoder(reader)),
            Self::Zstd => Box::new(zstd::stream::read::Decoder::with_buffer(BufReader::new(
                reader,
            ))?),
        };
        Ok(decoder)
    }
}
