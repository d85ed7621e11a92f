use rand::{Rng, rngs::StdRng};
use tracing::{debug, error, info, warn};

use tandem_core::{Problem, Scale, SolverKind, SparsityPattern, StatusUpdate, UpdateSink};
use tandem_solvers::Status;

use crate::{
    Config, Error, FrameId, RunSession, Scheduler,
    narration::{self, RESET_LINE},
    policy::ERROR_SAMPLE_INTERVAL,
    session::Advance,
};


/// The outcome of a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Start {
    /// A new run began.
    Started,

    /// A run was already active and was left untouched.
    AlreadyRunning,
}

/// The outcome of a delivered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// The frame was not the one the clock was waiting for (cancelled, from an
    /// earlier run, or delivered twice) and was ignored.
    Stale,

    /// Both trajectories advanced to `iteration`.
    Advanced {
        iteration: usize,

        /// True if this frame finished the run and no further frame was
        /// requested.
        finished: bool,
    },
}

/// Drives a [`RunSession`] one host frame at a time.
///
/// The clock owns all mutable engine state. Its scheduler `H`, sink `S`, and
/// random number generator `R` are injected at construction; nothing is global.
pub struct SimulationClock<H, S, R = StdRng> {
    config: Config,
    scheduler: H,
    sink: S,
    rng: R,
    session: Option<RunSession>,
    pending: Option<FrameId>,
}

impl<H, S> SimulationClock<H, S>
where
    H: Scheduler,
    S: UpdateSink,
{
    /// Creates an idle clock using the config's random number generator.
    pub fn new(config: Config, scheduler: H, sink: S) -> Self {
        let rng = config.rng();
        Self::with_rng(config, scheduler, sink, rng)
    }
}

impl<H, S, R> SimulationClock<H, S, R>
where
    H: Scheduler,
    S: UpdateSink,
    R: Rng,
{
    /// Creates an idle clock drawing randomness from `rng`.
    ///
    /// The config's seed is ignored.
    pub fn with_rng(config: Config, scheduler: H, sink: S, rng: R) -> Self {
        Self {
            config,
            scheduler,
            sink,
            rng,
            session: None,
            pending: None,
        }
    }

    /// Starts a run at the named scale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scale`] if `scale` is not `"small"` or `"large"`; no
    /// run is started and no update is emitted.
    pub fn run(&mut self, scale: &str) -> Result<Start, Error> {
        let scale = scale.parse::<Scale>().inspect_err(|e| {
            warn!(error = %e, "rejected run request");
        })?;
        Ok(self.start(scale))
    }

    /// Starts a run at `scale` unless one is already running.
    ///
    /// A new run gets a freshly generated problem, pending trajectories at
    /// iteration zero, and one requested frame. Any stopped session is
    /// replaced.
    pub fn start(&mut self, scale: Scale) -> Start {
        if self.is_running() {
            debug!(%scale, "start ignored, run already active");
            return Start::AlreadyRunning;
        }
        self.cancel_pending();

        let canvas = self.config.canvas();
        let matrix = self.config.matrix();
        let problem = Problem::generate(canvas.width, canvas.height, &mut self.rng);
        let patterns = SolverKind::ALL.map(|kind| {
            SparsityPattern::generate(kind, matrix.width, matrix.height, &mut self.rng)
        });

        let session = self.session.insert(RunSession::new(scale, problem));
        self.pending = Some(self.scheduler.request_frame());
        info!(%scale, "run started");

        self.sink.on_problem(session.problem());
        for (kind, pattern) in SolverKind::ALL.into_iter().zip(&patterns) {
            self.sink.on_sparsity(kind, pattern);
            self.sink.on_status_change(kind, StatusUpdate::Running);
            for line in narration::start_lines(kind, scale) {
                self.sink.on_log(kind, &line);
            }
        }

        Start::Started
    }

    /// Stops the active run.
    ///
    /// The pending frame is cancelled and the session is kept, so both
    /// trajectories retain their state until the next start.
    pub fn stop(&mut self) {
        self.cancel_pending();
        if let Some(session) = self.session.as_mut()
            && session.is_running()
        {
            session.halt();
            info!(iteration = session.iteration(), "run stopped");
        }
    }

    /// Stops the clock and discards the session.
    ///
    /// Renderers receive an empty path, a waiting status, and a reset line for
    /// both solvers.
    pub fn reset(&mut self) {
        self.stop();
        self.session = None;
        info!("run reset");

        for kind in SolverKind::ALL {
            self.sink.on_path_update(kind, &[]);
            self.sink.on_status_change(kind, StatusUpdate::Waiting);
            self.sink.on_log(kind, RESET_LINE);
        }
    }

    /// Handles a frame delivered by the host.
    ///
    /// Advances both trajectories by one iteration, requests the next frame
    /// unless both have converged, and then notifies the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if a trajectory rejects the iteration or no problem is
    /// active. Either way the run is aborted first.
    pub fn on_frame(&mut self, frame: FrameId) -> Result<Frame, Error> {
        if self.pending != Some(frame) {
            debug!(frame = frame.get(), "ignoring stale frame");
            return Ok(Frame::Stale);
        }
        self.pending = None;

        let Some(session) = self.session.as_mut() else {
            error!(frame = frame.get(), "frame delivered with no active problem");
            return Err(Error::NoActiveProblem);
        };
        if !session.is_running() {
            debug!(frame = frame.get(), "ignoring frame for stopped run");
            return Ok(Frame::Stale);
        }

        let advance = match session.advance(&mut self.rng) {
            Ok(advance) => advance,
            Err(e) => {
                session.halt();
                error!(error = %e, "aborting run");
                return Err(e.into());
            }
        };

        let finished = session.is_finished();
        if finished {
            session.halt();
            info!(iteration = advance.iteration, "run finished");
        } else {
            self.pending = Some(self.scheduler.request_frame());
        }
        debug!(iteration = advance.iteration, finished, "tick");

        notify(&mut self.sink, session, &advance);

        Ok(Frame::Advanced {
            iteration: advance.iteration,
            finished,
        })
    }

    fn cancel_pending(&mut self) {
        if let Some(frame) = self.pending.take() {
            self.scheduler.cancel_frame(frame);
        }
    }
}

impl<H, S, R> SimulationClock<H, S, R> {
    /// Returns true while a run is being ticked.
    pub fn is_running(&self) -> bool {
        self.session.as_ref().is_some_and(RunSession::is_running)
    }

    /// Returns the current session: the active run, or the last stopped or
    /// finished one. `None` before the first start and after a reset.
    pub fn session(&self) -> Option<&RunSession> {
        self.session.as_ref()
    }

    /// Returns the frame the clock is waiting for, if any.
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scheduler(&self) -> &H {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut H {
        &mut self.scheduler
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the clock, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Reports one advance to the sink. Engine state is final by the time this runs.
fn notify<S: UpdateSink>(sink: &mut S, session: &RunSession, advance: &Advance) {
    for (kind, step) in &advance.steps {
        let kind = *kind;
        sink.on_path_update(kind, session.path(kind));

        if step.converged_now() {
            let state = session.state(kind);
            info!(%kind, iteration = state.iterations(), error = state.error(), "trajectory converged");
            sink.on_status_change(
                kind,
                StatusUpdate::Converged {
                    iteration: state.iterations(),
                    error: state.error(),
                },
            );
            sink.on_log(kind, narration::converged_line(kind));
        } else if let Some(line) = narration::progress_line(kind, session.scale(), step) {
            sink.on_log(kind, &line);
        }
    }

    if advance.iteration % ERROR_SAMPLE_INTERVAL == 0 {
        for (kind, step) in &advance.steps {
            if step.status == Status::Running {
                sink.on_error_sample(*kind, advance.iteration, step.error);
            }
        }
    }
}
