//! Entry and destination types shared by the extraction strategies.

pub mod dest_dir;
pub mod entry;

pub use dest_dir::DestDir;
pub use entry::ArchiveEntry;
pub use entry::EntryType;
