use std::collections::VecDeque;

/// Identifies one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

impl FrameId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// The host's frame scheduler.
///
/// The clock calls [`request_frame`](Scheduler::request_frame) when it wants
/// to be ticked again and hands the returned id back through
/// [`SimulationClock::on_frame`](crate::SimulationClock::on_frame) when the
/// frame fires. In a browser this wraps `requestAnimationFrame`.
///
/// Cancellation is best-effort: a host may still deliver a cancelled frame,
/// and the clock ignores it.
pub trait Scheduler {
    /// Requests one future frame.
    fn request_frame(&mut self) -> FrameId;

    /// Withdraws a previously requested frame.
    fn cancel_frame(&mut self, frame: FrameId);
}

/// A first-in, first-out frame queue for headless hosts and tests.
///
/// Requested frames wait in the queue until the host [`pop`](FrameQueue::pop)s
/// them; cancelled frames are removed.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameId>,
}

impl FrameQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the oldest pending frame.
    pub fn pop(&mut self) -> Option<FrameId> {
        self.pending.pop_front()
    }

    /// Returns the number of frames waiting to fire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns how many frames have ever been requested.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.next_id
    }
}

impl Scheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameId {
        let frame = FrameId(self.next_id);
        self.next_id += 1;
        self.pending.push_back(frame);
        frame
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        self.pending.retain(|&f| f != frame);
    }
}
