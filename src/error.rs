//! Entropy failure causes.
//!
//! Every variant is unrecoverable. Values of this type never leave the crate:
//! backends report them with `?`, and the random layer hands them to
//! [`crate::fatal::abort`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why the operating system could not deliver entropy.
// Each target only builds one backend, so only some variants are constructed.
#[allow(dead_code)]
#[derive(Debug, Error)]
pub(crate) enum EntropyError {
    /// The platform random function could not be located at initialization.
    #[error("failed to load {0}()")]
    Unresolved(&'static str),

    /// `ProcessPrng` returned `FALSE`.
    #[error("ProcessPrng() failed")]
    ProcessPrngFailed,

    /// `getrandom(2)` returned a negative value.
    #[error("getrandom() error: {0}")]
    Getrandom(#[source] io::Error),

    /// `getrandom(2)` kept returning short reads.
    #[error("getrandom() failed: too many retries")]
    TooManyRetries,

    /// The random device could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    DeviceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The random device returned fewer bytes than requested.
    #[error("read {} error: {source}", path.display())]
    DeviceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
