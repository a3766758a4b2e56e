//! File System Trait
//!
//! The sync engine only needs two primitives from the filesystem: creating
//! parent directories and copying a file along with its metadata. Keeping
//! them behind a trait lets engine tests inject failures.

use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

/// Abstract file system interface used by the sync engine
pub trait FileSystem {
    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy `from` to `to`, overwriting, and carry over permissions and
    /// access/modification times.
    fn copy_with_metadata(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Local disk implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy_with_metadata(&self, from: &Path, to: &Path) -> io::Result<()> {
        // Opening a FIFO or device for reading can block forever
        let metadata = fs::metadata(from)?;
        if !metadata.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"));
        }

        // fs::copy already carries permission bits over
        fs::copy(from, to)?;

        let accessed = FileTime::from_last_access_time(&metadata);
        let modified = FileTime::from_last_modification_time(&metadata);
        filetime::set_file_times(to, accessed, modified)
    }
}

/// Mock file system for testing
///
/// Records every copy and can be told to fail copies of specific sources.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub copies: std::sync::Arc<std::sync::Mutex<Vec<(std::path::PathBuf, std::path::PathBuf)>>>,
    pub dirs: std::sync::Arc<std::sync::Mutex<Vec<std::path::PathBuf>>>,
    pub fail_on: std::sync::Arc<std::sync::Mutex<Vec<std::path::PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_copy_of(&self, path: impl Into<std::path::PathBuf>) {
        self.fail_on.lock().unwrap().push(path.into());
    }

    pub fn copied(&self) -> Vec<(std::path::PathBuf, std::path::PathBuf)> {
        self.copies.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn copy_with_metadata(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.fail_on.lock().unwrap().iter().any(|p| p == from) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.copies
            .lock()
            .unwrap()
            .push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }
}
