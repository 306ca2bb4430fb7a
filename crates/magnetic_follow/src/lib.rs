//! Magnetic pointer-follow behavior
//!
//! Attach [`PointerFollow`] to an element and it displaces toward (or away
//! from) the pointer while the pointer is inside a boundary region
//! centered on the element, then eases back to rest once the pointer
//! leaves. Pointer moves are coalesced so at most one element update runs
//! per frame.
//!
//! The host integration drives two things: it feeds pointer moves into
//! [`PointerFollow::dispatch_pointer_move`] and ticks
//! [`PointerFollow::run_frame`] once per rendered frame. Elements plug in
//! through the [`TargetElement`] trait from `magnetic_core`.
//!
//! ```rust
//! use std::sync::Arc;
//! use magnetic_core::element::TargetElement;
//! use magnetic_core::geometry::Bounds;
//! use magnetic_core::presentation::{Transform, Transition};
//! use magnetic_follow::{FollowConfig, PointerFollow};
//!
//! struct Panel;
//!
//! impl TargetElement for Panel {
//!     fn is_resolved(&self) -> bool {
//!         true
//!     }
//!     fn bounds(&self) -> Option<Bounds> {
//!         Some(Bounds::new(100.0, 100.0, 100.0, 100.0))
//!     }
//!     fn set_transform(&self, _transform: Transform) {}
//!     fn set_transition(&self, _transition: Transition) {}
//! }
//!
//! let follow = PointerFollow::new();
//! let attachment = follow.attach(Arc::new(Panel), FollowConfig::new().repel());
//!
//! follow.dispatch_pointer_move(170.0, 160.0);
//! assert_eq!(follow.run_frame(), 1);
//! # drop(attachment);
//! ```

use std::sync::{Arc, OnceLock};

pub mod binding;
pub mod config;
pub mod controller;

pub use binding::FollowBinding;
pub use config::FollowConfig;
pub use controller::{FollowAttachment, PointerFollow};

// ============================================================================
// Global Follow Controller State
// ============================================================================

/// Global controller for access from anywhere in the application
static GLOBAL_FOLLOW: OnceLock<Arc<PointerFollow>> = OnceLock::new();

/// Set the global pointer-follow controller
///
/// This should be called once at app startup after creating the
/// `PointerFollow`.
///
/// # Panics
///
/// Panics if called more than once.
pub fn set_global_follow(follow: Arc<PointerFollow>) {
    if GLOBAL_FOLLOW.set(follow).is_err() {
        panic!("set_global_follow() called more than once");
    }
}

/// Get the global pointer-follow controller
///
/// # Panics
///
/// Panics if `set_global_follow()` has not been called.
pub fn get_follow() -> Arc<PointerFollow> {
    GLOBAL_FOLLOW
        .get()
        .expect("Pointer-follow controller not initialized. Call set_global_follow() at app startup.")
        .clone()
}

/// Try to get the global controller (returns None if not initialized)
pub fn try_get_follow() -> Option<Arc<PointerFollow>> {
    GLOBAL_FOLLOW.get().cloned()
}

/// Check if the global controller has been initialized
pub fn is_follow_initialized() -> bool {
    GLOBAL_FOLLOW.get().is_some()
}
