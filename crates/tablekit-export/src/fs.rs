//! File-access collaborator seam.
//!
//! The engine never touches the filesystem directly; the host supplies an
//! implementation of [`FileAccess`]. [`LocalFileAccess`] is the plain
//! `std::fs` implementation used by the CLI and by tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Host-provided file operations.
pub trait FileAccess {
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
    fn read_text(&self, path: &Path) -> io::Result<String>;
    fn write_text(&self, path: &Path, text: &str) -> io::Result<()>;
    /// Files directly inside `dir` whose extension matches, sorted by
    /// path.
    fn list_files(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;
}

/// `std::fs`-backed [`FileAccess`]. Writes create missing parent
/// directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileAccess;

impl LocalFileAccess {
    fn ensure_parent(path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl FileAccess for LocalFileAccess {
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        Self::ensure_parent(path)?;
        fs::write(path, bytes)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, text: &str) -> io::Result<()> {
        Self::ensure_parent(path)?;
        fs::write(path, text)
    }

    fn list_files(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
