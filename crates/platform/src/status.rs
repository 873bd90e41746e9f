//! crates/platform/src/status.rs
//! Link-aware status queries and physical identity tokens.

use crate::kind::EntryKind;
use std::fs;
use std::io;
use std::path::Path;
#[cfg(not(unix))]
use std::path::PathBuf;

/// Opaque token identifying a physical filesystem object.
///
/// Two paths that reach the same directory (for example through a symbolic
/// link) produce equal identities. Unix hosts use the device and inode
/// numbers; other hosts fall back to the canonicalized path.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DirIdentity(Repr);

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum Repr {
    #[cfg(unix)]
    Inode { dev: u64, ino: u64 },
    #[cfg(not(unix))]
    Canonical(PathBuf),
}

impl DirIdentity {
    /// Builds an identity from raw device and inode numbers.
    #[cfg(unix)]
    #[must_use]
    pub const fn from_dev_ino(dev: u64, ino: u64) -> Self {
        Self(Repr::Inode { dev, ino })
    }

    #[cfg(unix)]
    fn from_metadata(_path: &Path, metadata: &fs::Metadata) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt;

        Ok(Self::from_dev_ino(metadata.dev(), metadata.ino()))
    }

    #[cfg(not(unix))]
    fn from_metadata(path: &Path, _metadata: &fs::Metadata) -> io::Result<Self> {
        fs::canonicalize(path).map(|canonical| Self(Repr::Canonical(canonical)))
    }
}

/// Result of a status query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileStatus {
    kind: EntryKind,
    identity: DirIdentity,
}

impl FileStatus {
    /// Object type reported by the query.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Physical identity of the object.
    #[must_use]
    pub const fn identity(&self) -> &DirIdentity {
        &self.identity
    }

    /// Consumes the status and returns its identity.
    #[must_use]
    pub fn into_identity(self) -> DirIdentity {
        self.identity
    }
}

/// Queries `path` without following a final symbolic link.
pub fn stat_no_follow(path: impl AsRef<Path>) -> io::Result<FileStatus> {
    let path = path.as_ref();
    let metadata = fs::symlink_metadata(path)?;
    status_from(path, &metadata)
}

/// Queries `path`, following symbolic links to their target.
pub fn stat_follow(path: impl AsRef<Path>) -> io::Result<FileStatus> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)?;
    status_from(path, &metadata)
}

fn status_from(path: &Path, metadata: &fs::Metadata) -> io::Result<FileStatus> {
    Ok(FileStatus {
        kind: EntryKind::from_file_type(metadata.file_type()),
        identity: DirIdentity::from_metadata(path, metadata)?,
    })
}
