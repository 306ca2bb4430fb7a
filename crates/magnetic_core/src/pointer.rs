//! Global pointer-move event source
//!
//! The follow behavior observes the whole viewport, not just its element:
//! the pointer must be tracked while outside the element to detect
//! re-entry into the boundary. [`PointerDispatcher`] is the process-wide
//! fan-out point the host feeds from its platform input layer, and
//! [`PointerHandle`] is the weak handle behaviors subscribe through.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

new_key_type! {
    /// Handle to a registered pointer-move listener
    pub struct PointerListenerId;
}

/// Callback invoked for every global pointer-move event
pub type PointerCallback = Box<dyn FnMut(f32, f32) + Send>;

struct DispatcherInner {
    listeners: SlotMap<PointerListenerId, PointerCallback>,
    /// Last dispatched pointer position
    pointer_x: f32,
    pointer_y: f32,
}

/// Viewport-global pointer-move dispatcher
///
/// Owned by the host (typically next to its event loop). Platform input
/// calls [`dispatch_move`](Self::dispatch_move) with viewport coordinates;
/// every registered listener observes every event. Listeners are invoked
/// with the dispatcher lock held and must not subscribe or unsubscribe
/// from within the callback.
pub struct PointerDispatcher {
    inner: Arc<Mutex<DispatcherInner>>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DispatcherInner {
                listeners: SlotMap::with_key(),
                pointer_x: 0.0,
                pointer_y: 0.0,
            })),
        }
    }

    /// Get a weak handle for subscribing listeners
    pub fn handle(&self) -> PointerHandle {
        PointerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Fan a pointer-move event out to all listeners
    pub fn dispatch_move(&self, x: f32, y: f32) {
        let mut inner = self.inner.lock().unwrap();
        inner.pointer_x = x;
        inner.pointer_y = y;
        for (_, listener) in inner.listeners.iter_mut() {
            listener(x, y);
        }
    }

    /// Last dispatched pointer position
    pub fn pointer_position(&self) -> (f32, f32) {
        let inner = self.inner.lock().unwrap();
        (inner.pointer_x, inner.pointer_y)
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }
}

impl Default for PointerDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the pointer dispatcher
///
/// Passed to behaviors that need to observe pointer movement. It won't
/// keep the dispatcher alive; operations on a dropped dispatcher no-op.
#[derive(Clone)]
pub struct PointerHandle {
    inner: Weak<Mutex<DispatcherInner>>,
}

impl PointerHandle {
    /// Register a pointer-move listener
    ///
    /// Returns `None` if the dispatcher has been dropped.
    pub fn subscribe<F>(&self, callback: F) -> Option<PointerListenerId>
    where
        F: FnMut(f32, f32) + Send + 'static,
    {
        self.inner.upgrade().map(|inner| {
            inner
                .lock()
                .unwrap()
                .listeners
                .insert(Box::new(callback))
        })
    }

    /// Remove a listener
    ///
    /// Returns true if the listener existed. Safe to call repeatedly.
    pub fn unsubscribe(&self, id: PointerListenerId) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner.lock().unwrap().listeners.remove(id).is_some(),
            None => false,
        }
    }

    /// Check if the dispatcher is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_dispatch() {
        let dispatcher = PointerDispatcher::new();
        let handle = dispatcher.handle();

        let seen: Arc<Mutex<Vec<(f32, f32)>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);

        let id = handle
            .subscribe(move |x, y| seen_clone.lock().unwrap().push((x, y)))
            .unwrap();

        dispatcher.dispatch_move(10.0, 20.0);
        dispatcher.dispatch_move(30.0, 40.0);

        assert_eq!(*seen.lock().unwrap(), vec![(10.0, 20.0), (30.0, 40.0)]);
        assert_eq!(dispatcher.pointer_position(), (30.0, 40.0));

        assert!(handle.unsubscribe(id));
        dispatcher.dispatch_move(50.0, 60.0);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let dispatcher = PointerDispatcher::new();
        let handle = dispatcher.handle();

        let id = handle.subscribe(|_, _| {}).unwrap();
        assert_eq!(dispatcher.listener_count(), 1);

        assert!(handle.unsubscribe(id));
        assert!(!handle.unsubscribe(id));
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let dispatcher = PointerDispatcher::new();
            dispatcher.handle()
        };

        // Dispatcher is dropped, handle should not be alive
        assert!(!handle.is_alive());
        assert!(handle.subscribe(|_, _| {}).is_none());
    }

    #[test]
    fn test_multiple_listeners_all_observe() {
        let dispatcher = PointerDispatcher::new();
        let handle = dispatcher.handle();

        let count: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
        for _ in 0..3 {
            let count = Arc::clone(&count);
            handle.subscribe(move |_, _| *count.lock().unwrap() += 1);
        }

        dispatcher.dispatch_move(0.0, 0.0);
        assert_eq!(*count.lock().unwrap(), 3);
    }
}
