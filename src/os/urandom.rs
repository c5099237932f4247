//! Operating system abstraction layer (device file)
//!
//! Fallback for Unix systems without a dedicated syscall: words are read from
//! `/dev/urandom` through a handle opened once at initialization and kept
//! until the process exits.
//!
//! Concurrent reads on one shared descriptor are serialized. A read that
//! delivers fewer than 4 bytes is a failure, never a partial word.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::EntropySource;
use crate::error::EntropyError;

const DEVICE: &str = "/dev/urandom";

/// Read-only handle on a random-bit device.
#[derive(Debug)]
pub(crate) struct DevUrandom {
    path: PathBuf,
    file: Mutex<File>,
}

impl DevUrandom {
    fn open_path(path: &Path) -> Result<Self, EntropyError> {
        let file = File::open(path).map_err(|source| EntropyError::DeviceOpen {
            path: path.to_owned(),
            source,
        })?;

        tracing::debug!(backend = "device", path = %path.display(), "secure random source ready");

        Ok(Self {
            path: path.to_owned(),
            file: Mutex::new(file),
        })
    }
}

impl EntropySource for DevUrandom {
    fn open() -> Result<Self, EntropyError> {
        Self::open_path(Path::new(DEVICE))
    }

    fn next_word(&self) -> Result<u32, EntropyError> {
        let mut buf = [0u8; 4];

        self.file
            .lock()
            .read_exact(&mut buf)
            .map_err(|source| EntropyError::DeviceRead {
                path: self.path.clone(),
                source,
            })?;

        Ok(u32::from_ne_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_words_from_device() {
        let source = DevUrandom::open().unwrap();
        let words: Vec<u32> = (0..8).map(|_| source.next_word().unwrap()).collect();

        assert!(words.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn words_are_taken_in_device_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[1, 0, 0, 0, 2, 0, 0, 0]).unwrap();

        let source = DevUrandom::open_path(file.path()).unwrap();

        assert_eq!(source.next_word().unwrap(), u32::from_ne_bytes([1, 0, 0, 0]));
        assert_eq!(source.next_word().unwrap(), u32::from_ne_bytes([2, 0, 0, 0]));
    }

    #[test]
    fn short_read_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[7, 7, 7]).unwrap();

        let source = DevUrandom::open_path(file.path()).unwrap();
        let err = source.next_word().unwrap_err();

        assert!(matches!(err, EntropyError::DeviceRead { .. }));
    }

    #[test]
    fn missing_device_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DevUrandom::open_path(&dir.path().join("urandom")).unwrap_err();

        match err {
            EntropyError::DeviceOpen { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
