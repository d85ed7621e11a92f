//! Runs one solver comparison to completion without a display.
//!
//! Each solver's console lines and its final status are printed as they
//! arrive. Set `RUST_LOG=tandem_engine=debug` to also see the clock's own
//! trace.
//!
//! # Usage
//!
//! ```text
//! cargo run --example headless -- small
//! cargo run --example headless -- large 42
//! ```
//!
//! The optional second argument fixes the random seed.

use std::error::Error;

use tandem_core::{Point, SolverKind, StatusUpdate, UpdateSink};
use tandem_engine::{Config, FrameQueue, SimulationClock, headless};
use tracing_subscriber::EnvFilter;

/// Prints console lines and status changes to stdout.
struct Console;

impl UpdateSink for Console {
    fn on_path_update(&mut self, _kind: SolverKind, _path: &[Point]) {}

    fn on_error_sample(&mut self, _kind: SolverKind, _iteration: usize, _error: f64) {}

    fn on_status_change(&mut self, kind: SolverKind, status: StatusUpdate) {
        if let StatusUpdate::Converged { iteration, error } = status {
            println!("[{kind}] converged after {iteration} iterations, error {error:.1e}");
        }
    }

    fn on_log(&mut self, kind: SolverKind, message: &str) {
        println!("[{kind}] {message}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let scale = args.next().unwrap_or_else(|| "small".into());
    let config = match args.next() {
        Some(seed) => Config::default().with_seed(seed.parse()?),
        None => Config::default(),
    };

    let mut clock = SimulationClock::new(config, FrameQueue::new(), Console);
    let _ = clock.run(&scale)?;
    let frames = headless::drive(&mut clock, usize::MAX)?;
    println!("finished after {frames} frames");

    Ok(())
}
