//! Operating system abstraction layer (Linux)
//!
//! Entropy comes straight from the kernel through the `getrandom` system
//! call. The backend holds no state: there is nothing to open and nothing to
//! release.
//!
//! A 4-byte request is normally served in one call. A short count without an
//! error is tolerated a bounded number of times; a negative return is not.

use std::io;

use libc::{c_void, getrandom};

use super::EntropySource;
use crate::error::EntropyError;

/// Total `getrandom` calls allowed for a single word.
const RETRY_MAX: usize = 3;

/// Kernel `getrandom(2)` backend.
#[derive(Debug)]
pub(crate) struct GetRandom;

impl EntropySource for GetRandom {
    fn open() -> Result<Self, EntropyError> {
        tracing::debug!(backend = "getrandom", "secure random source ready");
        Ok(Self)
    }

    fn next_word(&self) -> Result<u32, EntropyError> {
        read_word(sys_getrandom)
    }
}

fn sys_getrandom(buf: &mut [u8]) -> io::Result<usize> {
    let ret = unsafe { getrandom(buf.as_mut_ptr() as *mut c_void, buf.len(), 0) };

    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(ret as usize)
}

/// Fills one word using `fill`, retrying short reads.
///
/// Partial bytes from a short read are discarded; every attempt starts over
/// with a fresh buffer.
fn read_word<F>(mut fill: F) -> Result<u32, EntropyError>
where
    F: FnMut(&mut [u8]) -> io::Result<usize>,
{
    for attempt in 1..=RETRY_MAX {
        let mut buf = [0u8; 4];

        let n = fill(&mut buf).map_err(EntropyError::Getrandom)?;
        if n == buf.len() {
            return Ok(u32::from_ne_bytes(buf));
        }

        tracing::debug!(attempt, read = n, "getrandom() returned a short read");
    }

    Err(EntropyError::TooManyRetries)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake syscall returning the scripted byte counts in order.
    fn scripted(counts: &[usize]) -> impl FnMut(&mut [u8]) -> io::Result<usize> + '_ {
        let mut calls = counts.iter();
        move |buf| {
            let n = *calls.next().expect("unexpected extra getrandom call");
            buf[..n].fill(0xAB);
            Ok(n)
        }
    }

    #[test]
    fn full_read_returns_word() {
        let word = read_word(scripted(&[4])).unwrap();
        assert_eq!(word, 0xABAB_ABAB);
    }

    #[test]
    fn short_reads_are_retried_within_budget() {
        let word = read_word(scripted(&[1, 3, 4])).unwrap();
        assert_eq!(word, 0xABAB_ABAB);
    }

    #[test]
    fn three_short_reads_exhaust_budget() {
        let err = read_word(scripted(&[0, 2, 3])).unwrap_err();
        assert!(matches!(err, EntropyError::TooManyRetries));
        assert_eq!(err.to_string(), "getrandom() failed: too many retries");
    }

    #[test]
    fn syscall_error_is_not_retried() {
        let mut calls = 0;
        let err = read_word(|_| {
            calls += 1;
            Err(io::Error::from_raw_os_error(libc::ENOSYS))
        })
        .unwrap_err();

        assert_eq!(calls, 1);
        match err {
            EntropyError::Getrandom(source) => {
                assert_eq!(source.raw_os_error(), Some(libc::ENOSYS))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn kernel_delivers_words() {
        let source = GetRandom::open().unwrap();
        let words: Vec<u32> = (0..8).map(|_| source.next_word().unwrap()).collect();

        assert!(words.windows(2).any(|w| w[0] != w[1]));
    }
}
