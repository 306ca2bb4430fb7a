//! Presentation properties written by the follow behavior
//!
//! The controller mutates exactly two presentation properties on its
//! target: a 2D translation [`Transform`] and the [`Transition`] that the
//! host's compositor uses to animate toward it. The controller only sets
//! target state; driving intermediate animation frames is the host's job.

/// A 2D presentation transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// No displacement (the element's rest position)
    Identity,
    /// Translation in viewport pixels
    Translate { x: f32, y: f32 },
}

impl Transform {
    /// Identity transform (rest position)
    pub fn identity() -> Self {
        Transform::Identity
    }

    /// Translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Transform::Translate { x, y }
    }

    /// Translation components of this transform
    pub fn translation(&self) -> (f32, f32) {
        match self {
            Transform::Identity => (0.0, 0.0),
            Transform::Translate { x, y } => (*x, *y),
        }
    }

    /// Whether this transform leaves the element at rest
    pub fn is_identity(&self) -> bool {
        let (x, y) = self.translation();
        x == 0.0 && y == 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::Identity
    }
}

/// Easing function applied by the host's transition animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply the easing curve to a progress value in [0, 1]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// A transition toward the current transform target
///
/// Describes how the host animates the element toward the most recently
/// set [`Transform`]: a duration and an easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: u32,
    /// Easing curve
    pub easing: Easing,
}

impl Transition {
    /// Create a transition with the given duration and easing
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// An eased-out transition of the given duration
    pub fn ease_out(duration_ms: u32) -> Self {
        Self::new(duration_ms, Easing::EaseOut)
    }
}
