//! The simulation engine behind the Tandem solver comparison.
//!
//! A [`SimulationClock`] owns at most one [`RunSession`] at a time. On
//! [`start`](SimulationClock::start) it generates a fresh problem and two
//! trajectories, then asks its host [`Scheduler`] for a frame. Each frame the
//! host delivers back through [`on_frame`](SimulationClock::on_frame) advances
//! both trajectories by one iteration, schedules the next frame, and reports
//! to an [`UpdateSink`]. The loop ends on its own once both trajectories
//! converge, or when the host calls [`stop`](SimulationClock::stop) or
//! [`reset`](SimulationClock::reset).
//!
//! Everything is single-threaded and host-driven: the clock never blocks,
//! sleeps, or reads the time.
//!
//! # Emission cadence
//!
//! - Path updates go out for both solvers on every frame.
//! - Residual samples go out every [`ERROR_SAMPLE_INTERVAL`] frames, and only
//!   for solvers still running after that frame.
//! - Status changes go out on start, on convergence, and on reset.
//!
//! [`UpdateSink`]: tandem_core::UpdateSink

mod clock;
mod config;
mod error;
mod narration;
mod policy;
mod scheduler;
mod session;

pub mod headless;

pub use clock::{Frame, SimulationClock, Start};
pub use config::{Canvas, Config, ConfigError};
pub use error::Error;
pub use narration::RESET_LINE;
pub use policy::{
    ERROR_SAMPLE_INTERVAL, SYMMETRIC_LOG_INTERVAL, asymmetric_steps, symmetric_steps,
};
pub use scheduler::{FrameId, FrameQueue, Scheduler};
pub use session::RunSession;
