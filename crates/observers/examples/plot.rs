//! Runs one solver comparison headlessly and plots both residual curves.
//!
//! Console lines are logged through [`TracingSink`] while the run is driven to
//! completion; the collected residual samples are then shown in a window.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- small
//! cargo run --example plot --features plot -- large
//! ```

use std::error::Error;

use tandem_engine::{Config, FrameQueue, SimulationClock, headless};
use tandem_observers::{PlotSink, ShowConfig, TracingSink};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tandem=info")),
        )
        .init();

    let scale = std::env::args().nth(1).unwrap_or_else(|| "small".into());

    let mut plot = PlotSink::new();
    let mut clock = SimulationClock::new(
        Config::default(),
        FrameQueue::new(),
        (&mut plot, TracingSink),
    );
    let _ = clock.run(&scale)?;
    headless::drive(&mut clock, usize::MAX)?;

    plot.show(
        ShowConfig::new()
            .title(format!("Residuals: {scale} problem, symmetric vs. asymmetric"))
            .legend(),
    )?;

    Ok(())
}
