//! Core types for the Tandem solver comparison.
//!
//! This crate defines the shared vocabulary that trajectories, the simulation
//! clock, and renderers build on:
//!
//! - [`Point`] — an immutable 2D position
//! - [`ease_in_out_quad`] and [`Point::lerp`] — timing and geometry helpers
//! - [`Problem`] — the start point, optimum, and decorative constraints of a run
//! - [`Scale`] — the externally selected problem scale
//! - [`SolverKind`] — which of the two compared solvers an update refers to
//! - [`SparsityPattern`] — decorative matrix-structure data for each solver
//! - [`UpdateSink`] — receives path, error, status, and log updates

mod ease;
mod kind;
mod point;
mod problem;
mod scale;
mod sink;
mod sparsity;

pub use ease::ease_in_out_quad;
pub use kind::SolverKind;
pub use point::Point;
pub use problem::{CONSTRAINT_COUNT, Constraint, Problem};
pub use scale::{LARGE_STALL_RATE, Scale, ScaleError};
pub use sink::{StatusUpdate, UpdateSink};
pub use sparsity::{Mark, MarkRole, SparsityPattern};
