//! crates/platform/src/dir_stream.rs
//! Raw directory streams that surface the kind reported by the OS, if any.

use crate::kind::EntryKind;
use std::ffi::OsString;
use std::io;
use std::path::Path;

/// One entry as reported by the native directory API.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawEntry {
    /// Entry name, without any directory prefix, exactly as stored on disk.
    pub name: OsString,
    /// Kind reported alongside the name, `None` when the OS left it unset.
    pub reported: Option<EntryKind>,
}

/// Open native directory stream.
///
/// On Unix the stream is backed by `opendir`/`readdir`, so a `DT_UNKNOWN`
/// type from filesystems that do not populate `d_type` appears as
/// `reported == None`. The `.` and `..` pseudo-entries are passed through.
/// The stream is closed when dropped.
pub struct RawDirStream {
    inner: imp::Stream,
}

impl RawDirStream {
    /// Opens the directory at `path`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        imp::Stream::open(path.as_ref()).map(|inner| Self { inner })
    }

    /// Reads the next raw entry, or `None` at the end of the stream.
    ///
    /// Names are returned as raw OS strings; they need not be valid UTF-8.
    pub fn next_raw(&mut self) -> io::Result<Option<RawEntry>> {
        self.inner.next_raw()
    }

    /// Closes the stream.
    pub fn close(self) {
        drop(self);
    }
}

impl std::fmt::Debug for RawDirStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawDirStream").finish_non_exhaustive()
    }
}

#[cfg(unix)]
mod imp {
    use super::RawEntry;
    use crate::kind::EntryKind;
    use nix::dir::{Dir, OwningIter};
    use nix::fcntl::OFlag;
    use nix::sys::stat::Mode;
    use std::ffi::OsStr;
    use std::io;
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    pub(super) struct Stream {
        entries: OwningIter,
    }

    impl Stream {
        pub(super) fn open(path: &Path) -> io::Result<Self> {
            let flags = OFlag::O_RDONLY | OFlag::O_DIRECTORY | OFlag::O_CLOEXEC;
            let dir = Dir::open(path, flags, Mode::empty())?;
            Ok(Self {
                entries: dir.into_iter(),
            })
        }

        pub(super) fn next_raw(&mut self) -> io::Result<Option<RawEntry>> {
            let Some(entry) = self.entries.next() else {
                return Ok(None);
            };
            let entry = entry?;
            let name = OsStr::from_bytes(entry.file_name().to_bytes()).to_os_string();
            Ok(Some(RawEntry {
                name,
                reported: entry.file_type().map(EntryKind::from),
            }))
        }
    }
}

#[cfg(not(unix))]
mod imp {
    use super::RawEntry;
    use crate::kind::EntryKind;
    use std::fs::{self, ReadDir};
    use std::io;
    use std::path::Path;

    pub(super) struct Stream {
        entries: ReadDir,
    }

    impl Stream {
        pub(super) fn open(path: &Path) -> io::Result<Self> {
            fs::read_dir(path).map(|entries| Self { entries })
        }

        pub(super) fn next_raw(&mut self) -> io::Result<Option<RawEntry>> {
            let Some(entry) = self.entries.next() else {
                return Ok(None);
            };
            let entry = entry?;
            Ok(Some(RawEntry {
                name: entry.file_name(),
                reported: entry.file_type().ok().map(EntryKind::from_file_type),
            }))
        }
    }
}
