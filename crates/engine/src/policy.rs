//! Fixed tuning constants of the comparison.
//!
//! None of these derive from a real problem property.

use std::num::NonZeroUsize;

use tandem_core::Scale;

const SYMMETRIC_STEPS_SMALL: NonZeroUsize = NonZeroUsize::new(50).unwrap();
const SYMMETRIC_STEPS_LARGE: NonZeroUsize = NonZeroUsize::new(400).unwrap();
const ASYMMETRIC_STEPS_SMALL: NonZeroUsize = NonZeroUsize::new(20).unwrap();
const ASYMMETRIC_STEPS_LARGE: NonZeroUsize = NonZeroUsize::new(40).unwrap();

/// Residual samples are emitted on every frame whose iteration is a multiple
/// of this interval.
pub const ERROR_SAMPLE_INTERVAL: usize = 5;

/// The symmetric console prints a progress line on every iteration that is a
/// multiple of this interval.
pub const SYMMETRIC_LOG_INTERVAL: usize = 20;

/// Returns the symmetric solver's step count at `scale`.
#[must_use]
pub fn symmetric_steps(scale: Scale) -> NonZeroUsize {
    match scale {
        Scale::Small => SYMMETRIC_STEPS_SMALL,
        Scale::Large => SYMMETRIC_STEPS_LARGE,
    }
}

/// Returns the asymmetric solver's step count at `scale`.
#[must_use]
pub fn asymmetric_steps(scale: Scale) -> NonZeroUsize {
    match scale {
        Scale::Small => ASYMMETRIC_STEPS_SMALL,
        Scale::Large => ASYMMETRIC_STEPS_LARGE,
    }
}
