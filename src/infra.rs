//! Infrastructure traits for abstracting I/O operations.
//!
//! The config layer reads and writes through [`FileSystem`] so tests can
//! substitute an in-memory implementation.

use std::io;
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_real_filesystem_write_then_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("probe.txt");

        RealFileSystem.write(&path, "hello").unwrap();
        assert_eq!(RealFileSystem.read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_real_filesystem_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = RealFileSystem
            .read_to_string(&temp.path().join("absent.txt"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
