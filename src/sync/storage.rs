//! Storage backends for synchronization

use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_err};

/// Byte storage addressed by path
pub trait Storage {
    /// Read the content at `path`, `None` when nothing exists there
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Replace the content at `path`
    fn write(&mut self, path: &Path, content: &[u8]) -> Result<()>;
}

/// Storage backed by the real filesystem
#[derive(Debug, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            // A file where a parent directory should be means the artifact is absent too.
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(fs_err::file_read_error(path, &e)),
        }
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> Result<()> {
        std::fs::write(path, content).map_err(|e| fs_err::file_write_error(path, &e))
    }
}

/// Reads the filesystem but only records writes
#[derive(Debug, Default)]
pub struct DryRunStorage {
    inner: FsStorage,
    pending: Vec<PathBuf>,
}

impl DryRunStorage {
    /// Paths that would have been written
    pub fn pending(&self) -> &[PathBuf] {
        &self.pending
    }
}

impl Storage for DryRunStorage {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        self.inner.read(path)
    }

    fn write(&mut self, path: &Path, _content: &[u8]) -> Result<()> {
        self.pending.push(path.to_path_buf());
        Ok(())
    }
}

/// In-memory storage for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: std::collections::HashMap<PathBuf, Vec<u8>>,
    writes: usize,
    read_only: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_file(path: &Path, content: &[u8]) -> Self {
        let mut storage = Self::default();
        storage.files.insert(path.to_path_buf(), content.to_vec());
        storage
    }

    /// Storage whose writes all fail
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn insert(&mut self, path: &Path, content: &[u8]) {
        self.files.insert(path.to_path_buf(), content.to_vec());
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn paths(&self) -> Vec<&Path> {
        let mut paths: Vec<_> = self.files.keys().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> Result<()> {
        if self.read_only {
            return Err(fs_err::write_failed(
                path.display().to_string(),
                "read-only storage",
            ));
        }
        self.writes += 1;
        self.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}
