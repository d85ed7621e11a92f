use tandem_core::{Point, SolverKind, StatusUpdate, UpdateSink};
use tracing::{info, trace};

/// The `tracing` target console lines are emitted under.
pub const CONSOLE_TARGET: &str = "tandem::console";

/// A sink that forwards each solver's console to `tracing`.
///
/// Console lines and status changes are emitted at `INFO` under
/// [`CONSOLE_TARGET`] with the solver kind as a field. Residual samples and
/// path updates are emitted at `TRACE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl UpdateSink for TracingSink {
    fn on_path_update(&mut self, kind: SolverKind, path: &[Point]) {
        trace!(target: CONSOLE_TARGET, %kind, points = path.len(), "path");
    }

    fn on_error_sample(&mut self, kind: SolverKind, iteration: usize, error: f64) {
        trace!(target: CONSOLE_TARGET, %kind, iteration, error, "residual");
    }

    fn on_status_change(&mut self, kind: SolverKind, status: StatusUpdate) {
        match status {
            StatusUpdate::Waiting => info!(target: CONSOLE_TARGET, %kind, "waiting"),
            StatusUpdate::Running => info!(target: CONSOLE_TARGET, %kind, "running"),
            StatusUpdate::Converged { iteration, error } => {
                info!(target: CONSOLE_TARGET, %kind, iteration, error, "converged");
            }
        }
    }

    fn on_log(&mut self, kind: SolverKind, message: &str) {
        info!(target: CONSOLE_TARGET, %kind, "{message}");
    }
}
