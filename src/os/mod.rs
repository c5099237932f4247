//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's secure entropy facility.
//!
//! The backend is selected at compile time using conditional compilation.
//! Each submodule implements [`EntropySource`], and [`SysRandom`] names the
//! one chosen for the current target:
//!
//! | Target                        | Backend                      |
//! |-------------------------------|------------------------------|
//! | Windows                       | `ProcessPrng`                |
//! | Linux, Android                | `getrandom(2)`               |
//! | other Unix, or `dev-urandom`  | `/dev/urandom`               |
//!
//! There is no runtime fallback between backends.

use crate::error::EntropyError;

/// A handle able to produce raw 32-bit words of OS entropy.
///
/// Implementations behave as a uniform random bit generator over the full
/// `u32` domain. Both operations report failure instead of degrading; the
/// caller decides what failure means.
pub(crate) trait EntropySource: Send + Sync + Sized {
    /// Acquires whatever OS resource the backend needs.
    fn open() -> Result<Self, EntropyError>;

    /// Draws one word.
    fn next_word(&self) -> Result<u32, EntropyError>;
}

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub(crate) type SysRandom = windows::ProcessPrng;

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    not(feature = "dev-urandom")
))]
mod linux;

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    not(feature = "dev-urandom")
))]
pub(crate) type SysRandom = linux::GetRandom;

#[cfg(all(
    unix,
    any(test, feature = "dev-urandom", not(any(target_os = "linux", target_os = "android")))
))]
mod urandom;

#[cfg(all(
    unix,
    any(feature = "dev-urandom", not(any(target_os = "linux", target_os = "android")))
))]
pub(crate) type SysRandom = urandom::DevUrandom;

#[cfg(not(any(unix, windows)))]
compile_error!("osrand has no secure entropy backend for this target");
