use tandem_core::Point;

use super::{Status, TrajectoryState};

/// The outcome of one [`Trajectory::tick`](crate::Trajectory::tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The iteration this step reports.
    ///
    /// For a tick on an already converged trajectory this is the converged
    /// iteration count, not the requested iteration.
    pub iteration: usize,

    /// The newest path point.
    pub point: Point,

    /// The residual error after the tick.
    pub error: f64,

    /// The status after the tick.
    pub status: Status,

    /// The status entered on this tick, if it changed.
    pub transition: Option<Status>,
}

impl Step {
    pub(super) fn unchanged(state: &TrajectoryState) -> Self {
        Self {
            iteration: state.iterations(),
            point: state.head(),
            error: state.error(),
            status: state.status(),
            transition: None,
        }
    }

    /// Returns true if this tick converged the trajectory.
    #[must_use]
    pub fn converged_now(&self) -> bool {
        self.transition == Some(Status::Converged)
    }
}
