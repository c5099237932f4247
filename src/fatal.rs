//! Process termination on entropy failure.
//!
//! A broken secure random source is never reported to the caller. The failure
//! is logged and the process aborts, so no code path can continue with
//! missing or predictable randomness.

use crate::error::EntropyError;

/// Logs `err` and aborts the process.
///
/// The message goes both to `tracing` and to stderr, since the host may not
/// have installed a subscriber.
#[cold]
pub(crate) fn abort(err: EntropyError) -> ! {
    tracing::error!(error = %err, "secure random source failed");

    #[cfg(test)]
    intercept::trip(&err);

    eprintln!("fatal: secure random source failed: {err}");
    std::process::abort()
}
