//! Reusable update sinks for the Tandem solver comparison.
//!
//! Each type here implements [`UpdateSink`] and can be handed to a
//! `SimulationClock` directly, by `&mut` reference, or paired with another
//! sink as a tuple.
//!
//! - [`Recorder`] keeps every update in memory for inspection.
//! - [`TracingSink`] forwards console lines and status changes to `tracing`.
//!
//! # Features
//!
//! - `plot` — Enables [`PlotSink`] for viewing residual curves via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`UpdateSink`]: tandem_core::UpdateSink

mod recorder;
mod tracing_sink;

#[cfg(feature = "plot")]
mod plot;

pub use recorder::{Recorder, Update};
pub use tracing_sink::{CONSOLE_TARGET, TracingSink};

#[cfg(feature = "plot")]
pub use plot::{PlotSink, ShowConfig};
