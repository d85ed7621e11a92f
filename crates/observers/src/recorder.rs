use tandem_core::{Point, Problem, SolverKind, SparsityPattern, StatusUpdate, UpdateSink};

/// One update received by a [`Recorder`], with borrowed data copied out.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Problem(Problem),
    Sparsity(SolverKind, SparsityPattern),
    Path(SolverKind, Vec<Point>),
    ErrorSample {
        kind: SolverKind,
        iteration: usize,
        error: f64,
    },
    Status(SolverKind, StatusUpdate),
    Log(SolverKind, String),
}

impl Update {
    /// Returns the solver this update is addressed to, if any.
    pub fn kind(&self) -> Option<SolverKind> {
        match self {
            Self::Problem(_) => None,
            Self::Sparsity(kind, _)
            | Self::Path(kind, _)
            | Self::ErrorSample { kind, .. }
            | Self::Status(kind, _)
            | Self::Log(kind, _) => Some(*kind),
        }
    }
}

/// A sink that records every update in arrival order.
///
/// Useful in tests and headless runs. Pass `&mut recorder` to the clock so it
/// can be inspected afterwards, or recover it with `into_sink`.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    updates: Vec<Update>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded update, oldest first.
    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    /// Returns the updates addressed to `kind`.
    pub fn updates_for(&self, kind: SolverKind) -> impl DoubleEndedIterator<Item = &Update> {
        self.updates.iter().filter(move |u| u.kind() == Some(kind))
    }

    /// Returns the most recently announced problem.
    pub fn problem(&self) -> Option<&Problem> {
        self.updates.iter().rev().find_map(|u| match u {
            Update::Problem(problem) => Some(problem),
            _ => None,
        })
    }

    /// Returns the most recent sparsity pattern for `kind`.
    pub fn sparsity(&self, kind: SolverKind) -> Option<&SparsityPattern> {
        self.updates_for(kind).rev().find_map(|u| match u {
            Update::Sparsity(_, pattern) => Some(pattern),
            _ => None,
        })
    }

    /// Returns the most recent path for `kind`.
    pub fn latest_path(&self, kind: SolverKind) -> Option<&[Point]> {
        self.updates_for(kind).rev().find_map(|u| match u {
            Update::Path(_, path) => Some(path.as_slice()),
            _ => None,
        })
    }

    /// Returns the number of path updates received for `kind`.
    pub fn path_updates(&self, kind: SolverKind) -> usize {
        self.updates_for(kind)
            .filter(|u| matches!(u, Update::Path(..)))
            .count()
    }

    /// Returns the `(iteration, error)` samples for `kind`.
    pub fn error_samples(&self, kind: SolverKind) -> Vec<(usize, f64)> {
        self.updates_for(kind)
            .filter_map(|u| match u {
                Update::ErrorSample {
                    iteration, error, ..
                } => Some((*iteration, *error)),
                _ => None,
            })
            .collect()
    }

    /// Returns the status changes for `kind`.
    pub fn statuses(&self, kind: SolverKind) -> Vec<StatusUpdate> {
        self.updates_for(kind)
            .filter_map(|u| match u {
                Update::Status(_, status) => Some(*status),
                _ => None,
            })
            .collect()
    }

    /// Returns the most recent status for `kind`.
    pub fn latest_status(&self, kind: SolverKind) -> Option<StatusUpdate> {
        self.statuses(kind).last().copied()
    }

    /// Returns the console lines for `kind`.
    pub fn logs(&self, kind: SolverKind) -> Vec<&str> {
        self.updates_for(kind)
            .filter_map(|u| match u {
                Update::Log(_, line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.updates.clear();
    }
}

impl UpdateSink for Recorder {
    fn on_path_update(&mut self, kind: SolverKind, path: &[Point]) {
        self.updates.push(Update::Path(kind, path.to_vec()));
    }

    fn on_error_sample(&mut self, kind: SolverKind, iteration: usize, error: f64) {
        self.updates.push(Update::ErrorSample {
            kind,
            iteration,
            error,
        });
    }

    fn on_status_change(&mut self, kind: SolverKind, status: StatusUpdate) {
        self.updates.push(Update::Status(kind, status));
    }

    fn on_log(&mut self, kind: SolverKind, message: &str) {
        self.updates.push(Update::Log(kind, message.to_owned()));
    }

    fn on_problem(&mut self, problem: &Problem) {
        self.updates.push(Update::Problem(problem.clone()));
    }

    fn on_sparsity(&mut self, kind: SolverKind, pattern: &SparsityPattern) {
        self.updates.push(Update::Sparsity(kind, pattern.clone()));
    }
}
