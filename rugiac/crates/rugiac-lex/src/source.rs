//! Source input.
//!
//! The lexer scans a buffer that is fully in memory. These helpers perform
//! the one blocking read that materializes it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{LexError, Result};

/// Reads all of `reader` into memory.
///
/// With `max_bytes` set, reading stops one byte past the limit and the source
/// is rejected with [`LexError::SourceTooLarge`].
pub fn read_source<R: Read>(reader: R, max_bytes: Option<u64>) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match max_bytes {
        Some(limit) => {
            reader
                .take(limit.saturating_add(1))
                .read_to_end(&mut buffer)?;
            if buffer.len() as u64 > limit {
                return Err(LexError::SourceTooLarge { limit });
            }
        }
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut buffer)?;
        }
    }

    debug!(bytes = buffer.len(), "read source");
    Ok(buffer)
}

/// Reads the file at `path` into memory.
pub fn read_source_file(path: &Path, max_bytes: Option<u64>) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    read_source(file, max_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_all() {
        let bytes = read_source(&b"package main\n"[..], None).unwrap();
        assert_eq!(bytes, b"package main\n");
    }

    #[test]
    fn test_limit_exactly_reached() {
        let bytes = read_source(&b"abcd"[..], Some(4)).unwrap();
        assert_eq!(bytes.len(), 4);
    }

    #[test]
    fn test_limit_exceeded() {
        let result = read_source(&b"abcde"[..], Some(4));
        assert!(matches!(result, Err(LexError::SourceTooLarge { limit: 4 })));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"var x = 1").unwrap();
        let bytes = read_source_file(file.path(), None).unwrap();
        assert_eq!(bytes, b"var x = 1");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_source_file(&dir.path().join("missing.rg"), None);
        assert!(matches!(result, Err(LexError::Io(_))));
    }
}
