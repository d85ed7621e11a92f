//! Shared harness for end-to-end tests of the Tandem engine.

use tandem_core::Scale;
use tandem_engine::{Config, FrameQueue, RunSession, SimulationClock, headless};
use tandem_observers::Recorder;

/// A clock hosted on a frame queue that records every update.
pub type RecordingClock = SimulationClock<FrameQueue, Recorder>;

/// Creates an idle, seeded clock.
#[must_use]
pub fn seeded_clock(seed: u64) -> RecordingClock {
    SimulationClock::new(Config::default().with_seed(seed), FrameQueue::new(), Recorder::new())
}

/// A finished run: what the sink saw and where the engine ended up.
pub struct Finished {
    pub recorder: Recorder,
    pub session: RunSession,
    pub frames: usize,
}

/// Runs a seeded comparison at `scale` until both solvers converge.
///
/// # Panics
///
/// Panics if the run cannot be started or aborts.
#[must_use]
pub fn run_to_completion(scale: Scale, seed: u64) -> Finished {
    let mut clock = seeded_clock(seed);
    let _ = clock.start(scale);
    let frames = headless::drive(&mut clock, usize::MAX).expect("run aborted");
    let session = clock.session().expect("session retained after finish").clone();

    Finished {
        recorder: clock.into_sink(),
        session,
        frames,
    }
}
