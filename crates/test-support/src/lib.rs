#![deny(unsafe_code)]

//! Temporary directory trees for exercising the walker.
//!
//! [`TestTree`] owns a scratch directory containing an empty `root`
//! directory. Helpers create children relative to that root and panic on
//! failure, which is what a test wants.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch tree rooted at `<tempdir>/root`.
///
/// The scratch directory is removed when the value is dropped.
#[derive(Debug)]
pub struct TestTree {
    temp: TempDir,
    root: PathBuf,
    root_str: String,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Creates a scratch directory with an empty `root` inside it.
    #[must_use]
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let root = temp.path().join("root");
        fs::create_dir(&root).expect("create root");
        let root_str = root.to_str().expect("tempdir path is UTF-8").to_owned();
        Self {
            temp,
            root,
            root_str,
        }
    }

    /// The tree root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The tree root as a string.
    #[must_use]
    pub fn root_str(&self) -> &str {
        &self.root_str
    }

    /// Directory containing the root, for entries that live outside the tree.
    #[must_use]
    pub fn outside(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of `relative` inside the tree.
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Absolute path of `relative` inside the tree, as a string.
    #[must_use]
    pub fn path_str(&self, relative: &str) -> String {
        self.path(relative)
            .into_os_string()
            .into_string()
            .expect("tempdir path is UTF-8")
    }

    /// Creates the directory `relative` and any missing parents.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("create directory");
        path
    }

    /// Creates a small regular file at `relative`, creating parents.
    pub fn file(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, relative.as_bytes()).expect("write file");
        path
    }

    /// Creates a symbolic link at `link` pointing at `target` verbatim.
    ///
    /// `target` is interpreted by the OS relative to the link's directory.
    #[cfg(unix)]
    pub fn symlink(&self, target: impl AsRef<Path>, link: &str) -> PathBuf {
        let path = self.path(link);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        std::os::unix::fs::symlink(target, &path).expect("create symlink");
        path
    }

    /// Removes `relative`, whether a file, link, or directory tree.
    pub fn remove(&self, relative: &str) {
        let path = self.path(relative);
        let metadata = fs::symlink_metadata(&path).expect("stat before remove");
        if metadata.is_dir() {
            fs::remove_dir_all(&path).expect("remove directory");
        } else {
            fs::remove_file(&path).expect("remove file");
        }
    }
}
