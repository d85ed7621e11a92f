use tandem_core::ScaleError;

/// Errors reported by the simulation clock.
///
/// [`Error::Scale`] rejects a run before it starts. The remaining variants are
/// programming errors: the clock aborts the active run before returning them.
///
/// Config validation happens earlier, in [`Config::new`](crate::Config::new),
/// which reports a [`ConfigError`](crate::ConfigError) of its own.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error("trajectory invariant violated: {0}")]
    Trajectory(#[from] tandem_solvers::Error),

    #[error("frame delivered with no active problem")]
    NoActiveProblem,
}
