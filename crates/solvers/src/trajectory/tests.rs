use std::num::NonZeroUsize;

use approx::assert_relative_eq;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use tandem_core::{Point, Problem, Scale, SolverKind};

use crate::{Asymmetric, Schedule, Symmetric};

use super::{Error, Status, Trajectory};

fn problem() -> Problem {
    Problem::generate(400.0, 400.0, &mut StdRng::seed_from_u64(1))
}

fn steps(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn symmetric(n: usize, scale: Scale) -> Trajectory<Symmetric> {
    Trajectory::new(&problem(), Symmetric::new(steps(n), scale))
}

fn asymmetric(n: usize) -> Trajectory<Asymmetric> {
    Trajectory::new(&problem(), Asymmetric::new(steps(n)))
}

/// Ticks `trajectory` from 1 until it converges, returning every step.
fn run<S: Schedule>(trajectory: &mut Trajectory<S>, rng: &mut StdRng) -> Vec<super::Step> {
    let mut out = Vec::new();
    for iteration in 1.. {
        let step = trajectory.tick(iteration, rng).expect("increasing iteration");
        out.push(step);
        if step.status == Status::Converged {
            break;
        }
    }
    out
}

#[test]
fn starts_pending_at_problem_start() {
    let t = symmetric(50, Scale::Small);

    assert_eq!(t.status(), Status::Pending);
    assert_eq!(t.path(), [problem().start]);
    assert_eq!(t.state().iterations(), 0);
    assert_relative_eq!(t.state().error(), 1.0);
    assert_eq!(t.kind(), SolverKind::Symmetric);
}

#[test]
fn first_tick_starts_running() {
    let mut t = asymmetric(20);
    let step = t.tick(1, &mut StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(step.transition, Some(Status::Running));
    assert_eq!(step.status, Status::Running);
    assert_eq!(t.path().len(), 2);
}

#[test]
fn small_symmetric_converges_at_fifty() {
    let mut t = symmetric(50, Scale::Small);
    let steps = run(&mut t, &mut StdRng::seed_from_u64(2));

    let last = steps.last().unwrap();
    assert_eq!(last.iteration, 50);
    assert!(last.converged_now());
    assert_relative_eq!(last.error, 1e-5);
    assert_eq!(t.state().iterations(), 50);

    // Start, 49 running samples, then the optimum.
    assert_eq!(t.path().len(), 51);
    assert_eq!(*t.path().last().unwrap(), problem().optimal);
}

#[test]
fn symmetric_error_floored_while_running() {
    let mut t = symmetric(400, Scale::Large);
    let steps = run(&mut t, &mut StdRng::seed_from_u64(3));

    let (last, running) = steps.split_last().unwrap();
    assert_eq!(running.len(), 399);
    for step in running {
        assert_eq!(step.status, Status::Running);
        assert!(step.error >= 1e-4);
    }
    assert_eq!(last.iteration, 400);
    assert_relative_eq!(last.error, 1e-5);
}

#[test]
fn small_asymmetric_reports_twenty() {
    let mut t = asymmetric(20);
    let steps = run(&mut t, &mut StdRng::seed_from_u64(4));

    // Twenty running samples, then a bookkeeping tick that converges.
    assert_eq!(steps.len(), 21);
    let last = steps.last().unwrap();
    assert!(last.converged_now());
    assert_eq!(last.iteration, 21);
    assert_relative_eq!(last.error, 1e-10);
    assert_eq!(t.state().iterations(), 20);
    assert_eq!(t.path().len(), 22);
    assert_eq!(*t.path().last().unwrap(), problem().optimal);
}

#[test]
fn asymmetric_error_monotone_and_floored() {
    let mut t = asymmetric(40);
    let steps = run(&mut t, &mut StdRng::seed_from_u64(5));

    for pair in steps.windows(2) {
        assert!(pair[1].error <= pair[0].error);
    }
    assert!(steps.iter().all(|s| s.error >= 1e-10));
}

#[test]
fn converged_tick_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut t = symmetric(5, Scale::Small);
    run(&mut t, &mut rng);
    let before = t.state().clone();

    // Any iteration is accepted once converged, even a stale one.
    for iteration in [6, 100, 1] {
        let step = t.tick(iteration, &mut rng).unwrap();
        assert_eq!(step.status, Status::Converged);
        assert_eq!(step.transition, None);
        assert_eq!(step.iteration, 5);
        assert_eq!(step.point, problem().optimal);
    }
    assert_eq!(t.state(), &before);
}

#[test]
fn rejects_zero_iteration() {
    let mut t = symmetric(50, Scale::Small);
    let err = t.tick(0, &mut StdRng::seed_from_u64(0)).unwrap_err();

    assert_eq!(
        err,
        Error::NonIncreasingIteration {
            previous: 0,
            requested: 0
        }
    );
    assert_eq!(t.status(), Status::Pending);
}

#[test]
fn rejects_repeated_iteration_without_mutating() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut t = asymmetric(20);
    t.tick(1, &mut rng).unwrap();
    t.tick(2, &mut rng).unwrap();
    let before = t.state().clone();

    assert!(matches!(
        t.tick(2, &mut rng),
        Err(Error::NonIncreasingIteration {
            previous: 2,
            requested: 2
        })
    ));
    assert!(t.tick(1, &mut rng).is_err());
    assert_eq!(t.state(), &before);
}

#[test]
fn skipped_iterations_are_allowed() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut t = symmetric(50, Scale::Small);
    t.tick(10, &mut rng).unwrap();
    let step = t.tick(60, &mut rng).unwrap();

    assert!(step.converged_now());
    assert_eq!(step.iteration, 60);
    assert_eq!(t.path().len(), 3);
}

#[test]
fn single_step_symmetric_converges_from_pending() {
    let mut t = symmetric(1, Scale::Small);
    let step = t.tick(1, &mut StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(step.transition, Some(Status::Converged));
    assert_eq!(t.path(), [problem().start, problem().optimal]);
}

#[test]
fn symmetric_path_settles_onto_optimum() {
    let mut t = symmetric(50, Scale::Small);
    run(&mut t, &mut StdRng::seed_from_u64(8));

    let optimal = problem().optimal;
    let distance = |p: Point| (p.x - optimal.x).hypot(p.y - optimal.y);
    let path = t.path();
    let late = path[path.len() - 2];
    assert!(distance(late) < distance(path[1]));
}

proptest! {
    #[test]
    fn path_grows_by_one_and_keeps_its_prefix(
        seed in any::<u64>(),
        large in any::<bool>(),
        ticks in 1usize..450,
    ) {
        let scale = if large { Scale::Large } else { Scale::Small };
        let n = if large { 400 } else { 50 };
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sym = symmetric(n, scale);
        let mut asym = asymmetric(if large { 40 } else { 20 });

        for iteration in 1..=ticks {
            for (before, status_before, after) in [
                {
                    let before = sym.path().to_vec();
                    let status = sym.status();
                    sym.tick(iteration, &mut rng).unwrap();
                    (before, status, sym.path().to_vec())
                },
                {
                    let before = asym.path().to_vec();
                    let status = asym.status();
                    asym.tick(iteration, &mut rng).unwrap();
                    (before, status, asym.path().to_vec())
                },
            ] {
                if status_before == Status::Converged {
                    prop_assert_eq!(&after, &before);
                } else {
                    prop_assert_eq!(after.len(), before.len() + 1);
                    prop_assert_eq!(&after[..before.len()], &before[..]);
                }
            }
        }
    }

    #[test]
    fn asymmetric_error_never_increases(n in 1usize..60, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut t = asymmetric(n);
        let mut previous = f64::INFINITY;
        for iteration in 1..=n + 1 {
            let step = t.tick(iteration, &mut rng).unwrap();
            prop_assert!(step.error <= previous);
            prop_assert!(step.error >= 1e-10);
            previous = step.error;
        }
        prop_assert!(t.is_converged());
    }
}
