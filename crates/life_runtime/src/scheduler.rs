//! Frame scheduling
//!
//! A [`FrameScheduler`] is the animation-frame request/cancel pair of the
//! host. The host later fires a requested frame by handing its
//! [`FrameHandle`] back to the controller.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Opaque token for one requested frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait FrameScheduler {
    /// Ask for one callback at the next frame boundary.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request. Cancelling a fired or unknown handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Default)]
struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

/// Single-threaded FIFO scheduler for headless hosts and tests.
///
/// Clones share one queue: the controller owns one clone to request frames,
/// the host keeps another to fire them.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<FrameQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    pub fn pending(&self) -> Vec<FrameHandle> {
        self.queue.borrow().pending.iter().copied().collect()
    }

    /// Remove and return the oldest pending frame, for the host to fire.
    pub fn fire_next(&self) -> Option<FrameHandle> {
        self.queue.borrow_mut().pending.pop_front()
    }

    /// Frames requested over the scheduler's lifetime.
    pub fn requested_total(&self) -> u64 {
        self.queue.borrow().requested
    }

    /// Pending frames withdrawn before they fired.
    pub fn cancelled_total(&self) -> u64 {
        self.queue.borrow().cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let mut queue = self.queue.borrow_mut();
        let handle = FrameHandle(queue.next_id);
        queue.next_id += 1;
        queue.requested += 1;
        queue.pending.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|&pending| pending != handle);
        if queue.pending.len() != before {
            queue.cancelled += 1;
        }
    }
}
