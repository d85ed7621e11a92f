/// Errors that can occur when ticking a trajectory.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("iteration {requested} does not follow iteration {previous}")]
    NonIncreasingIteration { previous: usize, requested: usize },
}
