//! Synthetic solver trajectories.
//!
//! Neither solver here does any linear algebra. Each is a scripted
//! [`Trajectory`] that, tick by tick, moves a point from a problem's start
//! toward its optimum and reports a made-up residual error. The pace and
//! character of the motion come from a [`Schedule`]:
//!
//! - [`Symmetric`] — eased progress with decaying sinusoidal wobble and a noisy
//!   residual; slow and shaky on large problems
//! - [`Asymmetric`] — straight-line progress with a geometric residual decay
//!
//! Trajectories never read a clock. The caller supplies a strictly increasing
//! iteration number on every [`Trajectory::tick`], along with the random
//! number generator used for residual noise.

pub mod schedule;
pub mod trajectory;

pub use schedule::{Asymmetric, Sample, Schedule, Symmetric};
pub use trajectory::{Error, Status, Step, Trajectory, TrajectoryState};
