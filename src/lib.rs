//! Secure bounded random integers
//!
//! This crate exposes a single function, [`rand`], which returns a uniformly
//! distributed `u32` in a closed range using the operating system's
//! cryptographically secure entropy source.
//!
//! # Module overview
//!
//! - `os`
//!   Platform backends producing raw 32-bit words. Exactly one is compiled
//!   per target: `ProcessPrng` on Windows, the `getrandom` syscall on Linux
//!   and Android, and `/dev/urandom` on other Unix systems (or anywhere on
//!   Unix with the `dev-urandom` feature).
//!
//! - `rng`
//!   The process-wide entropy handle, opened lazily and exactly once, and the
//!   unbiased mapping of raw words onto the requested range.
//!
//! # Failure model
//!
//! A secure random source that stops working is never papered over. Any
//! entropy failure is logged through `tracing`, echoed to stderr, and the
//! process aborts. Callers never observe an error value.
//!
//! # Non-goals
//!
//! - No seedable or reproducible sequences
//! - No user-space entropy pooling or buffering
//! - No key derivation

mod error;
mod fatal;
mod os;
mod rng;

pub use rng::rand;
