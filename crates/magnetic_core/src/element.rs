//! Target element seam
//!
//! The follow behavior never owns, creates, or reparents the element it
//! tracks; it only reads geometry and writes two presentation properties.
//! [`TargetElement`] is the trait boundary to the host display tree that
//! expresses exactly that contract.

use crate::geometry::Bounds;
use crate::presentation::{Transform, Transition};

/// A non-owning handle to a visual element in the host display tree
///
/// Implemented by the host environment (an element registry entry, a
/// widget handle, or a test double). All methods are infallible by
/// contract: a handle that does not currently resolve to a live element
/// reports `is_resolved() == false` and `bounds() == None`, and the
/// presentation setters are then expected to no-op.
pub trait TargetElement: Send + Sync {
    /// Whether the handle currently refers to a live, mounted element
    fn is_resolved(&self) -> bool;

    /// Current viewport-relative bounds, measured fresh
    ///
    /// Returns `None` when the element is unmounted or has not been laid
    /// out yet.
    fn bounds(&self) -> Option<Bounds>;

    /// Set the element's presentation transform
    fn set_transform(&self, transform: Transform);

    /// Set the transition used to animate toward the current transform
    fn set_transition(&self, transition: Transition);
}
