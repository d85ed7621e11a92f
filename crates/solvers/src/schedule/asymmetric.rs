use std::num::NonZeroUsize;

use rand::Rng;
use tandem_core::{Point, SolverKind};

use super::{Sample, Schedule};

/// Lower bound on the residual, reached at machine precision.
pub const ERROR_FLOOR: f64 = 1e-10;

/// Residual decay factor per 1.5 iterations.
const DECAY: f64 = 0.1;
const DECAY_PERIOD: f64 = 1.5;

/// The asymmetric solver.
///
/// Moves along the straight line from start to optimum at a constant rate
/// with no noise, and its residual `0.1^(iteration / 1.5)` decays
/// geometrically down to [`ERROR_FLOOR`].
///
/// Runs while `iteration <= total_steps` and converges on the following tick.
/// Behavior is identical at every problem scale apart from the step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asymmetric {
    total_steps: NonZeroUsize,
}

impl Asymmetric {
    /// Creates a schedule reaching the optimum after `total_steps` iterations.
    #[must_use]
    pub fn new(total_steps: NonZeroUsize) -> Self {
        Self { total_steps }
    }

    /// Returns the residual at `iteration`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn error_at(iteration: usize) -> f64 {
        DECAY.powf(iteration as f64 / DECAY_PERIOD).max(ERROR_FLOOR)
    }
}

impl Schedule for Asymmetric {
    fn kind(&self) -> SolverKind {
        SolverKind::Asymmetric
    }

    fn total_steps(&self) -> usize {
        self.total_steps.get()
    }

    fn is_finished(&self, iteration: usize) -> bool {
        iteration > self.total_steps()
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample<R: Rng + ?Sized>(
        &self,
        iteration: usize,
        start: Point,
        optimal: Point,
        _rng: &mut R,
    ) -> Sample {
        let t = iteration as f64 / self.total_steps() as f64;
        Sample {
            point: start.lerp(optimal, t),
            error: Self::error_at(iteration),
        }
    }

    fn converged_error(&self) -> f64 {
        ERROR_FLOOR
    }

    /// The converging tick is bookkeeping only, so the schedule reports its
    /// own step count.
    fn reported_iteration(&self, _iteration: usize) -> usize {
        self.total_steps()
    }
}
