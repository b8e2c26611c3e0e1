//! Narrow filesystem interface used by the installer.
//!
//! The installer only ever needs to ask whether a path exists and to copy
//! one file over another, so that is all [`FileSystem`] exposes. Tests swap
//! in an in-memory fake or a `mockall` mock instead of touching disk.
use std::io;
use std::path::Path;

/// File operations the installer performs.
pub trait FileSystem {
    /// Return `true` if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Copy the file at `from` to `to`, replacing `to` if present.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if `from` cannot be read or `to`
    /// cannot be written.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::copy(from, to).map(|_| ())
    }
}

/// Test doubles for [`FileSystem`].
#[cfg(test)]
pub(crate) mod test_helpers {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::io;
    use std::path::{Path, PathBuf};

    use super::FileSystem;

    /// In-memory filesystem keyed by path.
    ///
    /// Paths registered with [`fail_writes_to`](Self::fail_writes_to) reject
    /// copies with `PermissionDenied`, which is how tests simulate a read-only
    /// project directory or an unwritable backup location.
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        files: RefCell<HashMap<PathBuf, String>>,
        read_only: HashSet<PathBuf>,
    }

    impl MemoryFs {
        #[must_use]
        pub fn with_file(self, path: &str, content: &str) -> Self {
            self.files
                .borrow_mut()
                .insert(PathBuf::from(path), content.to_string());
            self
        }

        #[must_use]
        pub fn fail_writes_to(mut self, path: &str) -> Self {
            self.read_only.insert(PathBuf::from(path));
            self
        }

        pub fn read(&self, path: &str) -> Option<String> {
            self.files.borrow().get(Path::new(path)).cloned()
        }
    }

    impl FileSystem for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }

        fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
            if self.read_only.contains(to) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            let content = self
                .files
                .borrow()
                .get(from)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;
            self.files.borrow_mut().insert(to.to_path_buf(), content);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::test_helpers::MemoryFs;
    use super::*;

    #[test]
    fn real_fs_copy_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("from");
        let to = dir.path().join("to");
        std::fs::write(&from, "new").unwrap();
        std::fs::write(&to, "old").unwrap();

        RealFs.copy(&from, &to).unwrap();

        assert_eq!(std::fs::read_to_string(&to).unwrap(), "new");
        assert_eq!(std::fs::read_to_string(&from).unwrap(), "new");
    }

    #[test]
    fn real_fs_copy_missing_source_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = RealFs
            .copy(&dir.path().join("missing"), &dir.path().join("to"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!dir.path().join("to").exists());
    }

    #[test]
    fn real_fs_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        assert!(!RealFs.exists(&file));
        std::fs::write(&file, "x").unwrap();
        assert!(RealFs.exists(&file));
    }

    #[test]
    fn memory_fs_copy_and_read_only() {
        let fs = MemoryFs::default()
            .with_file("/a", "content")
            .fail_writes_to("/locked");
        fs.copy(Path::new("/a"), Path::new("/b")).unwrap();
        assert_eq!(fs.read("/b").as_deref(), Some("content"));

        let err = fs.copy(Path::new("/a"), Path::new("/locked")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(!fs.exists(Path::new("/locked")));
    }
}
