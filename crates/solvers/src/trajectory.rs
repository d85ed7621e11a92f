//! The per-solver state machine.
//!
//! # Lifecycle
//!
//! A [`Trajectory`] moves one way through `Pending → Running → Converged`.
//! Construction leaves it pending with a one-point path at the problem's start.
//! Each [`tick`](Trajectory::tick) before convergence appends exactly one point:
//!
//! - while the schedule is unfinished, the scheduled sample
//! - on the finishing tick, the problem's optimum (no noise) together with
//!   the schedule's converged error
//!
//! Once converged, further ticks are no-ops that return the final state. The
//! path is never truncated or reordered.
//!
//! # Iterations
//!
//! Iteration numbers come from the caller and must strictly increase, starting
//! above zero. A non-increasing iteration is a programming error reported as
//! [`Error::NonIncreasingIteration`] without touching the state.

mod error;
mod state;
mod step;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use state::{Status, TrajectoryState};
pub use step::Step;

use rand::Rng;
use tandem_core::{Point, Problem, SolverKind};

use crate::Schedule;

/// One synthetic solver's progress across a run.
#[derive(Debug, Clone)]
pub struct Trajectory<S> {
    schedule: S,
    start: Point,
    optimal: Point,
    last_tick: usize,
    state: TrajectoryState,
}

impl<S: Schedule> Trajectory<S> {
    /// Creates a pending trajectory for `problem`.
    pub fn new(problem: &Problem, schedule: S) -> Self {
        Self {
            schedule,
            start: problem.start,
            optimal: problem.optimal,
            last_tick: 0,
            state: TrajectoryState::new(problem.start),
        }
    }

    /// Which solver this trajectory belongs to.
    pub fn kind(&self) -> SolverKind {
        self.schedule.kind()
    }

    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    pub fn state(&self) -> &TrajectoryState {
        &self.state
    }

    /// Returns the path history, oldest point first.
    pub fn path(&self) -> &[Point] {
        self.state.path()
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_converged(&self) -> bool {
        self.state.status() == Status::Converged
    }

    /// Advances the trajectory to `iteration`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonIncreasingIteration`] if `iteration` is not greater
    /// than the previous tick's iteration (zero before the first tick). A
    /// converged trajectory accepts any iteration and does nothing.
    pub fn tick<R: Rng + ?Sized>(&mut self, iteration: usize, rng: &mut R) -> Result<Step, Error> {
        if self.is_converged() {
            return Ok(Step::unchanged(&self.state));
        }
        if iteration <= self.last_tick {
            return Err(Error::NonIncreasingIteration {
                previous: self.last_tick,
                requested: iteration,
            });
        }
        self.last_tick = iteration;

        let previous = self.state.status();

        if self.schedule.is_finished(iteration) {
            let reported = self.schedule.reported_iteration(iteration);
            self.state
                .converge(self.optimal, self.schedule.converged_error(), reported);
        } else {
            let sample = self
                .schedule
                .sample(iteration, self.start, self.optimal, rng);
            self.state.advance(sample, iteration);
        }

        let status = self.state.status();
        Ok(Step {
            iteration,
            point: self.state.head(),
            error: self.state.error(),
            status,
            transition: (status != previous).then_some(status),
        })
    }
}
