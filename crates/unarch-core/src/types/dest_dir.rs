//! Destination directory for extraction.

use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionError;
use crate::Result;

/// Root directory that extracted entries are written under.
///
/// Construction creates the directory when it does not exist yet, so every
/// strategy can assume it is present.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use unarch_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create("/tmp/extraction")?;
/// let target = dest.resolve(Path::new("docs/readme.txt"))?;
/// assert!(target.starts_with(dest.as_path()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Creates the directory (recursively, idempotently) and canonicalizes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, or if the path
    /// exists but is not a directory.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        fs::create_dir_all(path)?;

        let canonical = path.canonicalize().map_err(|e| {
            ExtractionError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to canonicalize path {}: {e}", path.display()),
            ))
        })?;

        if !canonical.is_dir() {
            return Err(ExtractionError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path is not a directory: {}", canonical.display()),
            )));
        }

        Ok(Self(canonical))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins an archive entry name onto the destination.
    ///
    /// Leading `/` and `.` components are dropped so absolute names land
    /// inside the destination. A `..` component is rejected.
    ///
    /// # Errors
    ///
    /// Returns `PathTraversal` if the name contains a parent component.
    pub fn resolve(&self, entry_name: &Path) -> Result<PathBuf> {
        let mut resolved = self.0.clone();
        for component in entry_name.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
                Component::ParentDir => {
                    return Err(ExtractionError::PathTraversal {
                        path: entry_name.to_path_buf(),
                    });
                }
            }
        }
        Ok(resolved)
    }

    /// Joins a plain file name onto the destination.
    #[inline]
    #[must_use]
    pub fn join_path(&self, path: &Path) -> PathBuf {
        self.0.join(path)
    }
}
