//! Pointer-follow controller
//!
//! `PointerFollow` owns the shared [`PointerDispatcher`] and
//! [`FrameScheduler`] and hands out [`FollowAttachment`]s that bind one
//! element each. Pointer moves are coalesced per frame: each move cancels
//! the attachment's pending frame request and schedules a new one, so at
//! most one update runs per element per frame, carrying the latest pointer
//! position.

use std::sync::{Arc, Mutex, Weak};

use magnetic_core::element::TargetElement;
use magnetic_core::frame::{FrameHandle, FrameRequestId, FrameScheduler};
use magnetic_core::geometry::Boundary;
use magnetic_core::pointer::{PointerDispatcher, PointerHandle, PointerListenerId};
use magnetic_core::presentation::{Transform, Transition};

use crate::config::FollowConfig;

/// Transition duration applied while the pointer is inside the boundary
const FOLLOW_TRANSITION_MS: u32 = 100;

// ============================================================================
// Attachment state
// ============================================================================

struct AttachmentState {
    element: Arc<dyn TargetElement>,
    config: FollowConfig,
    frames: FrameHandle,
    /// At most one scheduled update per attachment
    pending: Option<FrameRequestId>,
    /// Cleared by detach; a frame callback drained before detach checks
    /// this and bails instead of writing to the element
    active: bool,
}

// ============================================================================
// PointerFollow
// ============================================================================

/// Entry point for the pointer-follow behavior
///
/// The host drives it with [`dispatch_pointer_move`](Self::dispatch_pointer_move)
/// on every pointer move and [`run_frame`](Self::run_frame) once per frame.
pub struct PointerFollow {
    pointer: PointerDispatcher,
    frames: FrameScheduler,
}

impl PointerFollow {
    pub fn new() -> Self {
        Self {
            pointer: PointerDispatcher::new(),
            frames: FrameScheduler::new(),
        }
    }

    /// Feed a pointer move into the controller
    pub fn dispatch_pointer_move(&self, x: f32, y: f32) {
        self.pointer.dispatch_move(x, y);
    }

    /// Run all frame callbacks scheduled since the last frame
    ///
    /// Returns the number of callbacks that ran.
    pub fn run_frame(&self) -> usize {
        self.frames.run_frame()
    }

    /// Access the pointer dispatcher, e.g. to share it with other systems
    pub fn pointer(&self) -> &PointerDispatcher {
        &self.pointer
    }

    /// Access the frame scheduler
    pub fn frames(&self) -> &FrameScheduler {
        &self.frames
    }

    /// Attach the follow behavior to an element
    ///
    /// If the element is not resolved yet (no layout, not mounted) the
    /// returned attachment is inert: it subscribes to nothing and every
    /// operation on it is a no-op. Callers that want to pick the element
    /// up once it resolves re-attach via [`FollowBinding`](crate::FollowBinding).
    pub fn attach(
        &self,
        element: Arc<dyn TargetElement>,
        config: FollowConfig,
    ) -> FollowAttachment {
        if !element.is_resolved() {
            tracing::debug!("follow attach skipped: element not resolved");
            return FollowAttachment {
                element,
                state: None,
                pointer: self.pointer.handle(),
                listener: None,
            };
        }

        let state = Arc::new(Mutex::new(AttachmentState {
            element: element.clone(),
            config,
            frames: self.frames.handle(),
            pending: None,
            active: true,
        }));

        let weak = Arc::downgrade(&state);
        let pointer = self.pointer.handle();
        let listener = pointer.subscribe(move |x, y| {
            on_pointer_move(&weak, x, y);
        });

        FollowAttachment {
            element,
            state: Some(state),
            pointer,
            listener,
        }
    }
}

impl Default for PointerFollow {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FollowAttachment
// ============================================================================

/// A live binding between one element and the pointer-follow behavior
///
/// Dropping the attachment detaches it.
pub struct FollowAttachment {
    element: Arc<dyn TargetElement>,
    state: Option<Arc<Mutex<AttachmentState>>>,
    pointer: PointerHandle,
    listener: Option<PointerListenerId>,
}

impl FollowAttachment {
    /// The element this attachment was created for
    pub fn element(&self) -> &Arc<dyn TargetElement> {
        &self.element
    }

    /// Whether the attachment is live (attached and not yet detached)
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Tear the attachment down
    ///
    /// Unsubscribes from pointer moves and cancels any scheduled update.
    /// Idempotent; calling it on an inert or already-detached attachment
    /// does nothing.
    pub fn detach(&mut self) {
        if let Some(state) = self.state.take() {
            // Cancel pending work and deactivate under the attachment
            // lock, then unsubscribe without holding it. A dispatch on
            // another thread may hold the dispatcher lock and be waiting
            // on this one.
            let mut guard = state.lock().unwrap();
            guard.active = false;
            if let Some(id) = guard.pending.take() {
                guard.frames.cancel(id);
            }
            drop(guard);
        }
        if let Some(id) = self.listener.take() {
            self.pointer.unsubscribe(id);
            tracing::trace!("follow attachment detached");
        }
    }
}

impl Drop for FollowAttachment {
    fn drop(&mut self) {
        self.detach();
    }
}

// ============================================================================
// Update pipeline
// ============================================================================

/// Pointer-move path: coalesce into a single pending frame request
fn on_pointer_move(state: &Weak<Mutex<AttachmentState>>, x: f32, y: f32) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let weak = Arc::downgrade(&state);
    let mut guard = state.lock().unwrap();
    if !guard.active {
        return;
    }
    if let Some(id) = guard.pending.take() {
        guard.frames.cancel(id);
    }
    guard.pending = guard.frames.request(move || {
        run_update(&weak, x, y);
    });
}

/// Frame path: measure, classify, and write transform + transition
fn run_update(state: &Weak<Mutex<AttachmentState>>, x: f32, y: f32) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut guard = state.lock().unwrap();
    guard.pending = None;
    if !guard.active {
        return;
    }

    // Fresh measurement every update; the element may have moved or
    // resized since attach
    let Some(bounds) = guard.element.bounds() else {
        tracing::trace!("follow update skipped: element has no bounds");
        return;
    };

    let boundary = Boundary::centered_on(
        &bounds,
        guard.config.boundary_width,
        guard.config.boundary_height,
    );

    if boundary.contains(x, y) {
        let (dx, dy) = boundary.offset_from_center(x, y);
        let (dx, dy) = if guard.config.follow {
            (dx, dy)
        } else {
            (-dx, -dy)
        };
        guard
            .element
            .set_transition(Transition::ease_out(FOLLOW_TRANSITION_MS));
        guard.element.set_transform(Transform::translate(dx, dy));
    } else {
        // Re-asserted on every outside move, not just on boundary exit,
        // so a stale transform never survives a missed crossing
        guard
            .element
            .set_transition(Transition::ease_out(guard.config.return_duration_ms));
        guard.element.set_transform(Transform::identity());
    }
}

// ============================================================================
// Tests
// ============================================================================
