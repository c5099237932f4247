//! Random number generation module
//!
//! Draws bounded integers directly from the operating system's secure
//! entropy source. Nothing is seeded, buffered, or expanded in user space:
//! every word of output comes from the OS.

mod layer;

use crate::os::SysRandom;
use layer::RandomLayer;

static LAYER: RandomLayer<SysRandom> = RandomLayer::new();

/// Returns a uniformly distributed integer in `[min, max]`, inclusive.
///
/// The OS entropy handle is opened on the first call and reused by every
/// call afterwards, from any thread. Values are unbiased: the range mapping
/// rejects raw words instead of reducing them modulo the range.
///
/// # Panics
/// Panics if `min > max`.
///
/// # Aborts
/// If the operating system cannot provide entropy, the failure is logged and
/// the process aborts. This function never returns a degraded value.
///
/// # Examples
/// ```
/// let roll = osrand::rand(1, 6);
/// assert!((1..=6).contains(&roll));
/// ```
pub fn rand(min: u32, max: u32) -> u32 {
    LAYER.draw(min, max)
}
