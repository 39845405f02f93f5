//! Archive format detection and the extraction strategies.

pub mod common;
pub mod compression;
pub mod detect;
pub mod external;
pub mod tar;
pub mod traits;
pub mod zip;

pub use compression::CompressionCodec;
pub use detect::ArchiveType;
pub use detect::Strategy;
pub use tar::TarArchive;
pub use traits::ArchiveFormat;
pub use zip::ZipArchive;
