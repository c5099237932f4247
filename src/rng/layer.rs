//! Lazily opened entropy handle and the ranged draw on top of it.
//!
//! [`RandomLayer`] owns at most one [`EntropySource`], created on first use
//! and shared by every later caller. It is the single place where entropy
//! failures become process termination.

use std::sync::OnceLock;

use rand::distributions::{Distribution, Uniform};
use rand_core::{RngCore, impls};

use crate::fatal;
use crate::os::EntropySource;

/// Process-wide entropy handle with one-time initialization.
pub(crate) struct RandomLayer<S> {
    source: OnceLock<S>,
}

impl<S: EntropySource> RandomLayer<S> {
    pub(crate) const fn new() -> Self {
        Self {
            source: OnceLock::new(),
        }
    }

    /// Returns the handle, opening it if this is the first use.
    ///
    /// Concurrent first callers block until the single winner has finished;
    /// none of them ever sees a partially opened source.
    fn source(&self) -> &S {
        self.source
            .get_or_init(|| S::open().unwrap_or_else(|err| fatal::abort(err)))
    }

    /// Draws a value uniformly distributed over `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub(crate) fn draw(&self, min: u32, max: u32) -> u32 {
        // Building the distribution is a few integer ops, far cheaper than
        // the syscall behind each word.
        let uniform = Uniform::new_inclusive(min, max);

        uniform.sample(&mut Words(self.source()))
    }
}

/// Adapts an [`EntropySource`] to `RngCore` for the distribution code.
///
/// Every word is fetched from the OS; nothing is buffered.
struct Words<'a, S>(&'a S);

impl<S: EntropySource> RngCore for Words<'_, S> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_word().unwrap_or_else(|err| fatal::abort(err))
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
