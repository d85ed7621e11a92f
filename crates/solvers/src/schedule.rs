//! Per-iteration scripts that drive a [`Trajectory`](crate::Trajectory).

pub mod asymmetric;
pub mod symmetric;

pub use asymmetric::Asymmetric;
pub use symmetric::Symmetric;

use rand::Rng;
use tandem_core::{Point, SolverKind};

/// A point and residual error produced by one running iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub point: Point,
    pub error: f64,
}

/// Scripts the motion and residual of one synthetic solver.
///
/// A schedule is stateless: every answer depends only on the iteration
/// number it is asked about (plus the random generator, for noise).
pub trait Schedule {
    /// Which solver this schedule scripts.
    fn kind(&self) -> SolverKind;

    /// The number of steps the schedule is tuned for.
    fn total_steps(&self) -> usize;

    /// Returns true once `iteration` should converge rather than sample.
    fn is_finished(&self, iteration: usize) -> bool;

    /// Produces the point and residual of a running iteration.
    fn sample<R: Rng + ?Sized>(
        &self,
        iteration: usize,
        start: Point,
        optimal: Point,
        rng: &mut R,
    ) -> Sample;

    /// The residual error reported once converged.
    fn converged_error(&self) -> f64;

    /// The iteration count to report when converging on `iteration`.
    fn reported_iteration(&self, iteration: usize) -> usize;
}
