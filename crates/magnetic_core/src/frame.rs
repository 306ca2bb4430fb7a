//! Display-refresh frame scheduling
//!
//! A request/cancel primitive over the host's redraw cadence, analogous
//! to `requestAnimationFrame`/`cancelAnimationFrame`. Work queued from an
//! input event runs once at the next refresh instead of synchronously,
//! which lets callers bound their update rate to the display regardless
//! of input event frequency.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

new_key_type! {
    /// Handle to a scheduled-but-not-yet-run frame callback
    pub struct FrameRequestId;
}

/// Callback run once at the next frame
pub type FrameCallback = Box<dyn FnOnce() + Send>;

struct SchedulerInner {
    pending: SlotMap<FrameRequestId, FrameCallback>,
}

/// The frame scheduler the host ticks once per display refresh
///
/// Owned by the host next to its render loop; components schedule work
/// through the weak [`FrameHandle`]. A request that is cancelled before
/// [`run_frame`](Self::run_frame) never runs.
pub struct FrameScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                pending: SlotMap::with_key(),
            })),
        }
    }

    /// Get a weak handle for scheduling frame callbacks
    pub fn handle(&self) -> FrameHandle {
        FrameHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Run every pending callback exactly once
    ///
    /// Callbacks are drained under the lock and run after it is released,
    /// so a callback may safely schedule new work for the *next* frame.
    /// Returns the number of callbacks run.
    pub fn run_frame(&self) -> usize {
        let drained: Vec<FrameCallback> = {
            let mut inner = self.inner.lock().unwrap();
            inner.pending.drain().map(|(_, cb)| cb).collect()
        };

        let count = drained.len();
        if count > 0 {
            tracing::trace!(callbacks = count, "frame scheduler: running frame");
        }
        for callback in drained {
            callback();
        }
        count
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().pending.len()
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the frame scheduler
#[derive(Clone)]
pub struct FrameHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl FrameHandle {
    /// Schedule a callback for the next frame
    ///
    /// Returns `None` if the scheduler has been dropped.
    pub fn request<F>(&self, callback: F) -> Option<FrameRequestId>
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.upgrade().map(|inner| {
            inner
                .lock()
                .unwrap()
                .pending
                .insert(Box::new(callback))
        })
    }

    /// Cancel a scheduled callback so it never runs
    ///
    /// Returns true if the callback was still pending. Requests that have
    /// already run (or been cancelled) return false.
    pub fn cancel(&self, id: FrameRequestId) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner.lock().unwrap().pending.remove(id).is_some(),
            None => false,
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_runs_once() {
        let scheduler = FrameScheduler::new();
        let handle = scheduler.handle();

        let runs: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
        let runs_clone = Arc::clone(&runs);
        handle.request(move || *runs_clone.lock().unwrap() += 1);

        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(*runs.lock().unwrap(), 1);

        // A second frame runs nothing
        assert_eq!(scheduler.run_frame(), 0);
        assert_eq!(*runs.lock().unwrap(), 1);
    }

    #[test]
    fn test_cancel_prevents_run() {
        let scheduler = FrameScheduler::new();
        let handle = scheduler.handle();

        let runs: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
        let runs_clone = Arc::clone(&runs);
        let id = handle
            .request(move || *runs_clone.lock().unwrap() += 1)
            .unwrap();

        assert!(handle.cancel(id));
        assert!(!handle.cancel(id)); // already gone

        assert_eq!(scheduler.run_frame(), 0);
        assert_eq!(*runs.lock().unwrap(), 0);
    }

    #[test]
    fn test_cancel_after_run_is_false() {
        let scheduler = FrameScheduler::new();
        let handle = scheduler.handle();

        let id = handle.request(|| {}).unwrap();
        scheduler.run_frame();
        assert!(!handle.cancel(id));
    }

    #[test]
    fn test_callback_can_schedule_next_frame() {
        let scheduler = FrameScheduler::new();
        let handle = scheduler.handle();

        let runs: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
        let runs_clone = Arc::clone(&runs);
        let rescheduler = handle.clone();
        handle.request(move || {
            *runs_clone.lock().unwrap() += 1;
            let runs_inner = Arc::clone(&runs_clone);
            rescheduler.request(move || *runs_inner.lock().unwrap() += 1);
        });

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(*runs.lock().unwrap(), 2);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = FrameScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle.request(|| {}).is_none());
    }
}
