//! crates/walk/src/reader.rs
//! Directory entry reader that always produces a definite kind.

use crate::error::WalkError;
use logging::debug_log;
use platform::{EntryKind, RawDirStream, stat_no_follow};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// Name and kind of one directory entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirEntry {
    name: OsString,
    kind: EntryKind,
}

impl DirEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Entry name exactly as stored in the directory.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Entry name for display; invalid UTF-8 is replaced.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Kind of the entry itself; links are not followed.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Whether the entry itself is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// Open directory being enumerated.
///
/// `.` and `..` are never returned. When the OS does not report a kind the
/// reader queries the entry's status without following links; an entry that
/// vanished in the meantime is reported as [`EntryKind::Unknown`]. The
/// underlying stream is closed on [`close`](Self::close) or drop.
#[derive(Debug)]
pub struct DirReader {
    path: PathBuf,
    stream: RawDirStream,
    use_reported: bool,
}

impl DirReader {
    /// Opens `path` for enumeration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WalkError> {
        let path = path.as_ref();
        let stream = RawDirStream::open(path)
            .map_err(|source| WalkError::open_dir(&path.to_string_lossy(), source))?;
        debug_log!(Dir, 2, "opened {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            stream,
            use_reported: true,
        })
    }

    /// Opens `path` and resolves every kind by status query, as on
    /// filesystems that never fill in the entry type.
    #[cfg(test)]
    pub(crate) fn open_unreported(path: impl AsRef<Path>) -> Result<Self, WalkError> {
        let mut reader = Self::open(path)?;
        reader.use_reported = false;
        Ok(reader)
    }

    /// Path the reader was opened with.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the next entry, or `None` once the directory is exhausted.
    ///
    /// A failed status query concerns that entry only; later calls continue
    /// with the next one.
    pub fn read_entry(&mut self) -> Result<Option<DirEntry>, WalkError> {
        loop {
            let raw = self
                .stream
                .next_raw()
                .map_err(|source| WalkError::read_entry(&self.path.to_string_lossy(), source))?;
            let Some(raw) = raw else {
                return Ok(None);
            };
            if raw.name == "." || raw.name == ".." {
                continue;
            }
            let reported = raw.reported.filter(|_| self.use_reported);
            let kind = match reported {
                Some(kind) => kind,
                None => resolve_kind(&self.path, &raw.name)?,
            };
            return Ok(Some(DirEntry::new(raw.name, kind)));
        }
    }

    /// Closes the directory.
    pub fn close(self) {
        debug_log!(Dir, 2, "closed {}", self.path.display());
        self.stream.close();
    }
}

impl Iterator for DirReader {
    type Item = Result<DirEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_entry().transpose()
    }
}

/// Determines the kind of `name` inside `dir` without following links.
pub(crate) fn resolve_kind(dir: &Path, name: &OsStr) -> Result<EntryKind, WalkError> {
    let path = dir.join(name);
    match stat_no_follow(&path) {
        Ok(status) => {
            debug_log!(Stat, 1, "resolved {} as {}", path.display(), status.kind());
            Ok(status.kind())
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug_log!(Stat, 1, "{} vanished before its kind was resolved", path.display());
            Ok(EntryKind::Unknown)
        }
        Err(source) => Err(WalkError::status(&path.to_string_lossy(), source)),
    }
}
