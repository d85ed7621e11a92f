use rand::Rng;
use tandem_core::{Point, Problem, Scale, SolverKind};
use tandem_solvers::{Asymmetric, Error, Step, Symmetric, Trajectory, TrajectoryState};

use crate::policy::{asymmetric_steps, symmetric_steps};

/// One run of the comparison: a problem, both trajectories, and the shared
/// iteration counter.
///
/// The session owns the problem; the trajectories hold copies of its start and
/// optimal points and never see it mutated.
#[derive(Debug, Clone)]
pub struct RunSession {
    scale: Scale,
    problem: Problem,
    symmetric: Trajectory<Symmetric>,
    asymmetric: Trajectory<Asymmetric>,
    iteration: usize,
    running: bool,
}

/// The steps both trajectories took on one iteration, symmetric first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Advance {
    pub(crate) iteration: usize,
    pub(crate) steps: [(SolverKind, Step); 2],
}

impl RunSession {
    pub(crate) fn new(scale: Scale, problem: Problem) -> Self {
        let symmetric = Trajectory::new(&problem, Symmetric::new(symmetric_steps(scale), scale));
        let asymmetric = Trajectory::new(&problem, Asymmetric::new(asymmetric_steps(scale)));
        Self {
            scale,
            problem,
            symmetric,
            asymmetric,
            iteration: 0,
            running: true,
        }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Returns the last iteration both trajectories were advanced to.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns true while the clock is still ticking this session.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true once both trajectories have converged.
    pub fn is_finished(&self) -> bool {
        self.symmetric.is_converged() && self.asymmetric.is_converged()
    }

    pub fn symmetric(&self) -> &Trajectory<Symmetric> {
        &self.symmetric
    }

    pub fn asymmetric(&self) -> &Trajectory<Asymmetric> {
        &self.asymmetric
    }

    /// Returns the state of the trajectory for `kind`.
    pub fn state(&self, kind: SolverKind) -> &TrajectoryState {
        match kind {
            SolverKind::Symmetric => self.symmetric.state(),
            SolverKind::Asymmetric => self.asymmetric.state(),
        }
    }

    /// Returns the path history of the trajectory for `kind`.
    pub fn path(&self, kind: SolverKind) -> &[Point] {
        self.state(kind).path()
    }

    /// Advances both trajectories to the next iteration.
    pub(crate) fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Advance, Error> {
        let iteration = self.iteration + 1;
        let symmetric = self.symmetric.tick(iteration, rng)?;
        let asymmetric = self.asymmetric.tick(iteration, rng)?;
        self.iteration = iteration;

        Ok(Advance {
            iteration,
            steps: [
                (SolverKind::Symmetric, symmetric),
                (SolverKind::Asymmetric, asymmetric),
            ],
        })
    }

    pub(crate) fn halt(&mut self) {
        self.running = false;
    }

    /// Moves the shared counter back so the next advance repeats an iteration.
    #[cfg(test)]
    pub(crate) fn rewind_to(&mut self, iteration: usize) {
        self.iteration = iteration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};
    use tandem_solvers::Status;

    fn session(scale: Scale) -> RunSession {
        let mut rng = StdRng::seed_from_u64(0);
        RunSession::new(scale, Problem::generate(400.0, 400.0, &mut rng))
    }

    #[test]
    fn new_session_is_running_and_pending() {
        let s = session(Scale::Small);

        assert!(s.is_running());
        assert!(!s.is_finished());
        assert_eq!(s.iteration(), 0);
        for kind in SolverKind::ALL {
            assert_eq!(s.state(kind).status(), Status::Pending);
            assert_eq!(s.path(kind), [s.problem().start]);
        }
    }

    #[test]
    fn step_counts_follow_scale() {
        use tandem_solvers::Schedule;

        let small = session(Scale::Small);
        assert_eq!(small.symmetric().schedule().total_steps(), 50);
        assert_eq!(small.asymmetric().schedule().total_steps(), 20);

        let large = session(Scale::Large);
        assert_eq!(large.symmetric().schedule().total_steps(), 400);
        assert_eq!(large.asymmetric().schedule().total_steps(), 40);
    }

    #[test]
    fn advance_ticks_both_in_order() {
        let mut s = session(Scale::Small);
        let mut rng = StdRng::seed_from_u64(1);
        let advance = s.advance(&mut rng).unwrap();

        assert_eq!(advance.iteration, 1);
        assert_eq!(advance.steps[0].0, SolverKind::Symmetric);
        assert_eq!(advance.steps[1].0, SolverKind::Asymmetric);
        assert_eq!(s.iteration(), 1);
    }

    #[test]
    fn repeated_iteration_is_rejected() {
        let mut s = session(Scale::Small);
        let mut rng = StdRng::seed_from_u64(3);
        s.advance(&mut rng).unwrap();
        s.advance(&mut rng).unwrap();
        s.rewind_to(1);

        assert_eq!(
            s.advance(&mut rng).unwrap_err(),
            Error::NonIncreasingIteration {
                previous: 2,
                requested: 2
            }
        );
        assert_eq!(s.iteration(), 1);
        assert_eq!(s.path(SolverKind::Symmetric).len(), 3);
    }

    #[test]
    fn finishes_when_both_converge() {
        let mut s = session(Scale::Small);
        let mut rng = StdRng::seed_from_u64(2);
        while !s.is_finished() {
            s.advance(&mut rng).unwrap();
        }

        assert_eq!(s.iteration(), 50);
        assert!(s.is_running());
        s.halt();
        assert!(!s.is_running());
    }
}
