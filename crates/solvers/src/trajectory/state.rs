use tandem_core::Point;

use crate::Sample;

/// Residual error reported before the first tick.
const INITIAL_ERROR: f64 = 1.0;

/// Where a trajectory is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Created but not yet ticked.
    Pending,

    /// Ticked at least once and still sampling its schedule.
    Running,

    /// Reached the optimum; further ticks are no-ops.
    Converged,
}

/// The observable state of a [`Trajectory`](crate::Trajectory).
///
/// The path is append-only and always starts with the problem's start point,
/// so it is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryState {
    path: Vec<Point>,
    error: f64,
    iterations: usize,
    status: Status,
}

impl TrajectoryState {
    pub(super) fn new(start: Point) -> Self {
        Self {
            path: vec![start],
            error: INITIAL_ERROR,
            iterations: 0,
            status: Status::Pending,
        }
    }

    /// Returns the path history, oldest point first.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Returns the most recent path point.
    pub fn head(&self) -> Point {
        // The path is seeded with the start point and only ever grows.
        self.path[self.path.len() - 1]
    }

    /// Returns the current residual error.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Returns the iteration count: the last running iteration, or the count
    /// the schedule reported on convergence.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(super) fn advance(&mut self, sample: Sample, iteration: usize) {
        self.path.push(sample.point);
        self.error = sample.error;
        self.iterations = iteration;
        self.status = Status::Running;
    }

    pub(super) fn converge(&mut self, optimal: Point, error: f64, iterations: usize) {
        self.path.push(optimal);
        self.error = error;
        self.iterations = iterations;
        self.status = Status::Converged;
    }
}
