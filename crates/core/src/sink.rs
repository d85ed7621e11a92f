//! The interface renderers implement to receive engine updates.

use crate::{Point, Problem, SolverKind, SparsityPattern};

/// A solver status as presented to renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusUpdate {
    /// No run is active for this solver.
    Waiting,

    /// The solver is iterating.
    Running,

    /// The solver has converged.
    Converged {
        /// The iteration count reported for the solver.
        iteration: usize,

        /// The final residual error.
        error: f64,
    },
}

/// Receives updates from the simulation clock.
///
/// Implemented by renderers (path plots, residual charts, consoles). Calls are
/// fire-and-forget: the clock finishes updating its own state before it calls
/// into a sink, and everything passed by reference is a read-only snapshot.
///
/// A built-in impl for `()` discards every update, and `(A, B)` forwards each
/// update to both sinks in order.
pub trait UpdateSink {
    /// Receives the full path history of a solver after it advanced.
    fn on_path_update(&mut self, kind: SolverKind, path: &[Point]);

    /// Receives a residual-error sample.
    ///
    /// Called at most once every five ticks per solver, and only while the
    /// solver is still running.
    fn on_error_sample(&mut self, kind: SolverKind, iteration: usize, error: f64);

    /// Receives a solver status change.
    fn on_status_change(&mut self, kind: SolverKind, status: StatusUpdate);

    /// Receives a human-readable progress line for a solver's console.
    fn on_log(&mut self, kind: SolverKind, message: &str);

    /// Receives the problem of a newly started run.
    fn on_problem(&mut self, _problem: &Problem) {}

    /// Receives the decorative sparsity pattern of a solver's system matrix.
    fn on_sparsity(&mut self, _kind: SolverKind, _pattern: &SparsityPattern) {}
}

/// A no-op sink that discards every update.
impl UpdateSink for () {
    fn on_path_update(&mut self, _kind: SolverKind, _path: &[Point]) {}

    fn on_error_sample(&mut self, _kind: SolverKind, _iteration: usize, _error: f64) {}

    fn on_status_change(&mut self, _kind: SolverKind, _status: StatusUpdate) {}

    fn on_log(&mut self, _kind: SolverKind, _message: &str) {}
}

/// Allows `&mut S` to be handed to the clock so the sink can be inspected
/// after a run.
impl<S: UpdateSink + ?Sized> UpdateSink for &mut S {
    fn on_path_update(&mut self, kind: SolverKind, path: &[Point]) {
        (**self).on_path_update(kind, path);
    }

    fn on_error_sample(&mut self, kind: SolverKind, iteration: usize, error: f64) {
        (**self).on_error_sample(kind, iteration, error);
    }

    fn on_status_change(&mut self, kind: SolverKind, status: StatusUpdate) {
        (**self).on_status_change(kind, status);
    }

    fn on_log(&mut self, kind: SolverKind, message: &str) {
        (**self).on_log(kind, message);
    }

    fn on_problem(&mut self, problem: &Problem) {
        (**self).on_problem(problem);
    }

    fn on_sparsity(&mut self, kind: SolverKind, pattern: &SparsityPattern) {
        (**self).on_sparsity(kind, pattern);
    }
}

/// Fans every update out to two sinks.
impl<A: UpdateSink, B: UpdateSink> UpdateSink for (A, B) {
    fn on_path_update(&mut self, kind: SolverKind, path: &[Point]) {
        self.0.on_path_update(kind, path);
        self.1.on_path_update(kind, path);
    }

    fn on_error_sample(&mut self, kind: SolverKind, iteration: usize, error: f64) {
        self.0.on_error_sample(kind, iteration, error);
        self.1.on_error_sample(kind, iteration, error);
    }

    fn on_status_change(&mut self, kind: SolverKind, status: StatusUpdate) {
        self.0.on_status_change(kind, status);
        self.1.on_status_change(kind, status);
    }

    fn on_log(&mut self, kind: SolverKind, message: &str) {
        self.0.on_log(kind, message);
        self.1.on_log(kind, message);
    }

    fn on_problem(&mut self, problem: &Problem) {
        self.0.on_problem(problem);
        self.1.on_problem(problem);
    }

    fn on_sparsity(&mut self, kind: SolverKind, pattern: &SparsityPattern) {
        self.0.on_sparsity(kind, pattern);
        self.1.on_sparsity(kind, pattern);
    }
}
