//! The filesystem as seen by the finder.
//!
//! Config discovery only ever asks two questions: does this file exist, and
//! what does it contain. [`FileSystem`] captures exactly that so the finder
//! can run against the real disk ([`OsFileSystem`]) or a seeded in-memory
//! tree ([`MemoryFileSystem`]) in tests and embedding tools.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::paths::normalize;

/// Read-only filesystem access used by the finder.
pub trait FileSystem {
    /// Whether `path` exists and is a regular file (symlinks are followed).
    fn is_file(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The process's real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// An in-memory tree of files keyed by absolute path.
///
/// Directories are implicit: a directory exists as long as some file lives
/// beneath it.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file. The path is normalized before insertion.
    pub fn insert(&mut self, path: impl AsRef<Path>, contents: impl Into<String>) {
        self.files
            .insert(normalize(path.as_ref()), contents.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize(path))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_files_are_found_by_normalized_path() {
        let fs = MemoryFileSystem::new().with_file("/p/a/../wrangler.toml", "x = 1");
        assert!(fs.is_file(Path::new("/p/wrangler.toml")));
        assert!(fs.is_file(Path::new("/p/./wrangler.toml")));
        assert_eq!(
            fs.read_to_string(Path::new("/p/wrangler.toml")).unwrap(),
            "x = 1"
        );
    }

    #[test]
    fn memory_directories_are_not_files() {
        let fs = MemoryFileSystem::new().with_file("/p/sub/wrangler.toml", "");
        assert!(!fs.is_file(Path::new("/p/sub")));
    }

    #[test]
    fn memory_missing_file_is_not_found() {
        let fs = MemoryFileSystem::new();
        let err = fs.read_to_string(Path::new("/nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn os_filesystem_distinguishes_files_from_dirs() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("wrangler.toml")).unwrap();
        std::fs::write(dir.path().join("wrangler.json"), "{}").unwrap();

        let fs = OsFileSystem;
        assert!(!fs.is_file(&dir.path().join("wrangler.toml")));
        assert!(fs.is_file(&dir.path().join("wrangler.json")));
        assert_eq!(
            fs.read_to_string(&dir.path().join("wrangler.json")).unwrap(),
            "{}"
        );
    }
}
