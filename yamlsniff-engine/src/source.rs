//! Source acquisition for [`LinesOf`](crate::LinesOf)

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads the full contents of a source.
///
/// Implementations must release any handle they open before returning,
/// whether the read succeeds or fails.
pub trait SourceReader {
    /// Read every byte of `path`
    fn read_source(&mut self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads sources from the file system in binary mode
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read_source(&mut self, path: &Path) -> io::Result<Vec<u8>> {
        // The file is dropped, and closed, on every return path
        let mut file = File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

impl<R: SourceReader + ?Sized> SourceReader for &mut R {
    fn read_source(&mut self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read_source(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_raw_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("utf16.yaml");
        fs::write(&path, [0xFF, 0xFE, b'a', 0x00]).unwrap();

        let bytes = FsReader.read_source(&path).unwrap();
        assert_eq!(bytes, [0xFF, 0xFE, b'a', 0x00]);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = FsReader
            .read_source(&temp_dir.path().join("missing.yaml"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
