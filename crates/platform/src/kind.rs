//! crates/platform/src/kind.rs
//! Filesystem object types reported for directory entries.

use std::fmt;
use std::fs::FileType;

/// Filesystem object type of a directory entry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntryKind {
    /// Regular file.
    RegularFile,
    /// Directory.
    Directory,
    /// Symbolic link (or junction), not followed.
    SymbolicLink,
    /// Character device.
    CharDevice,
    /// Block device.
    BlockDevice,
    /// Named pipe.
    Fifo,
    /// Unix domain socket.
    Socket,
    /// The entry vanished before its type could be determined.
    Unknown,
}

impl EntryKind {
    /// Classifies a [`FileType`] obtained from `std::fs`.
    #[must_use]
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            return Self::Directory;
        }
        if file_type.is_file() {
            return Self::RegularFile;
        }
        if file_type.is_symlink() {
            return Self::SymbolicLink;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;

            if file_type.is_char_device() {
                return Self::CharDevice;
            }
            if file_type.is_block_device() {
                return Self::BlockDevice;
            }
            if file_type.is_fifo() {
                return Self::Fifo;
            }
            if file_type.is_socket() {
                return Self::Socket;
            }
        }

        Self::Unknown
    }

    /// Reports whether this is [`EntryKind::Directory`].
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Reports whether this is [`EntryKind::SymbolicLink`].
    #[must_use]
    pub const fn is_symlink(self) -> bool {
        matches!(self, Self::SymbolicLink)
    }

    /// Short lowercase label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RegularFile => "file",
            Self::Directory => "dir",
            Self::SymbolicLink => "symlink",
            Self::CharDevice => "chardev",
            Self::BlockDevice => "blockdev",
            Self::Fifo => "fifo",
            Self::Socket => "socket",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(unix)]
impl From<nix::dir::Type> for EntryKind {
    fn from(value: nix::dir::Type) -> Self {
        use nix::dir::Type;

        match value {
            Type::Fifo => Self::Fifo,
            Type::CharacterDevice => Self::CharDevice,
            Type::Directory => Self::Directory,
            Type::BlockDevice => Self::BlockDevice,
            Type::File => Self::RegularFile,
            Type::Symlink => Self::SymbolicLink,
            Type::Socket => Self::Socket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn classifies_files_and_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("file.txt");
        fs::write(&file, b"data").expect("write");

        let dir_type = fs::symlink_metadata(temp.path()).expect("stat dir").file_type();
        let file_type = fs::symlink_metadata(&file).expect("stat file").file_type();
        assert_eq!(EntryKind::from_file_type(dir_type), EntryKind::Directory);
        assert_eq!(EntryKind::from_file_type(file_type), EntryKind::RegularFile);
    }

    #[cfg(unix)]
    #[test]
    fn classifies_symlink_without_following() {
        let temp = tempfile::tempdir().expect("tempdir");
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path(), &link).expect("symlink");

        let file_type = fs::symlink_metadata(&link).expect("lstat").file_type();
        assert_eq!(EntryKind::from_file_type(file_type), EntryKind::SymbolicLink);
    }

    #[cfg(unix)]
    #[test]
    fn converts_nix_types() {
        assert_eq!(EntryKind::from(nix::dir::Type::Symlink), EntryKind::SymbolicLink);
        assert_eq!(EntryKind::from(nix::dir::Type::File), EntryKind::RegularFile);
        assert_eq!(EntryKind::from(nix::dir::Type::Socket), EntryKind::Socket);
    }

    #[test]
    fn display_uses_short_labels() {
        assert_eq!(EntryKind::Directory.to_string(), "dir");
        assert_eq!(EntryKind::Unknown.to_string(), "unknown");
    }
}
