//! Magnetic Core Primitives
//!
//! This crate provides the host-environment seams consumed by the
//! pointer-follow behavior in `magnetic_follow`:
//!
//! - **Geometry**: element bounds and the boundary region math
//! - **Presentation**: the transform/transition properties the behavior writes
//! - **Target Element**: the non-owning handle trait to the host display tree
//! - **Pointer Dispatch**: a viewport-global pointer-move event source
//! - **Frame Scheduling**: a request/cancel display-refresh primitive
//!
//! # Example
//!
//! ```rust
//! use magnetic_core::{Boundary, Bounds};
//!
//! let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
//! let boundary = Boundary::centered_on(&bounds, Some(200.0), Some(200.0));
//!
//! // Boundary is centered on the element and edges count as inside
//! assert_eq!(boundary.center(), bounds.center());
//! assert!(boundary.contains(-50.0, 50.0));
//! ```

pub mod element;
pub mod frame;
pub mod geometry;
pub mod pointer;
pub mod presentation;

pub use element::TargetElement;
pub use frame::{FrameCallback, FrameHandle, FrameRequestId, FrameScheduler};
pub use geometry::{Boundary, Bounds};
pub use pointer::{PointerCallback, PointerDispatcher, PointerHandle, PointerListenerId};
pub use presentation::{Easing, Transform, Transition};
