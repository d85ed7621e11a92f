//! Driving a clock without a display.
//!
//! A headless host is just a [`FrameQueue`] drained in a loop. This is how
//! tests, benchmarks, and command-line demos run a comparison to completion.

use rand::Rng;
use tandem_core::UpdateSink;
use tracing::debug;

use crate::{Error, Frame, FrameQueue, SimulationClock};

/// Delivers queued frames to `clock` until none remain or `max_frames` have
/// been delivered.
///
/// Returns the number of frames that advanced the run. Stale frames are
/// delivered but not counted.
///
/// # Errors
///
/// Returns the first error reported by [`SimulationClock::on_frame`].
pub fn drive<S, R>(
    clock: &mut SimulationClock<FrameQueue, S, R>,
    max_frames: usize,
) -> Result<usize, Error>
where
    S: UpdateSink,
    R: Rng,
{
    let mut advanced = 0;
    for _ in 0..max_frames {
        let Some(frame) = clock.scheduler_mut().pop() else {
            break;
        };
        if let Frame::Advanced { .. } = clock.on_frame(frame)? {
            advanced += 1;
        }
    }

    debug!(advanced, pending = clock.scheduler().len(), "headless drive done");
    Ok(advanced)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tandem_core::{Scale, SolverKind};
    use tandem_solvers::Status;

    use crate::Config;

    #[test]
    fn drives_a_small_run_to_completion() {
        let mut clock = SimulationClock::new(Config::default().with_seed(3), FrameQueue::new(), ());
        let _ = clock.start(Scale::Small);

        assert_eq!(drive(&mut clock, usize::MAX).unwrap(), 50);
        assert!(!clock.is_running());
        assert_eq!(
            clock.session().unwrap().state(SolverKind::Asymmetric).status(),
            Status::Converged
        );
    }

    #[test]
    fn stops_at_the_frame_limit() {
        let mut clock = SimulationClock::new(Config::default().with_seed(3), FrameQueue::new(), ());
        let _ = clock.start(Scale::Large);

        assert_eq!(drive(&mut clock, 25).unwrap(), 25);
        assert!(clock.is_running());
        assert_eq!(clock.session().unwrap().iteration(), 25);
        assert_eq!(clock.scheduler().len(), 1);
    }

    #[test]
    fn idle_clock_delivers_nothing() {
        let mut clock = SimulationClock::new(Config::default(), FrameQueue::new(), ());
        assert_eq!(drive(&mut clock, 10).unwrap(), 0);
    }
}
