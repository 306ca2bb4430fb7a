//! Element geometry and boundary regions
//!
//! [`Bounds`] is the viewport-relative rectangle of a laid-out element.
//! [`Boundary`] is the ephemeral interaction region derived from it on
//! every update: an axis-aligned rectangle centered on the element's
//! bounds, sized by explicit overrides or defaulting to the element's
//! rendered size.

/// Viewport-relative bounds of a laid-out element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// X position (absolute, after layout)
    pub x: f32,
    /// Y position (absolute, after layout)
    pub y: f32,
    /// Computed width
    pub width: f32,
    /// Computed height
    pub height: f32,
}

impl Bounds {
    /// Create new bounds
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside the bounds (half-open, hit-test style)
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Center point of the bounds
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Interaction boundary centered on an element
///
/// Recomputed from fresh bounds on every pointer update; never stored
/// across frames. Unlike [`Bounds::contains`], containment here is a
/// closed interval: a pointer exactly on an edge counts as inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Boundary {
    /// Build a boundary centered on the given element bounds
    ///
    /// `width`/`height` override the boundary size; `None` falls back to
    /// the element's rendered size, in which case the boundary exactly
    /// covers the element.
    pub fn centered_on(bounds: &Bounds, width: Option<f32>, height: Option<f32>) -> Self {
        let w = width.unwrap_or(bounds.width);
        let h = height.unwrap_or(bounds.height);
        let left = bounds.x + (bounds.width - w) / 2.0;
        let top = bounds.y + (bounds.height - h) / 2.0;
        Self {
            left,
            top,
            right: left + w,
            bottom: top + h,
        }
    }

    /// Closed-interval containment test (edges count as inside)
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left && px <= self.right && py >= self.top && py <= self.bottom
    }

    /// Center point of the boundary
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Pointer offset from the boundary center
    pub fn offset_from_center(&self, px: f32, py: f32) -> (f32, f32) {
        let (cx, cy) = self.center();
        (px - cx, py - cy)
    }

    /// Boundary width
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Boundary height
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::new(10.0, 20.0, 100.0, 50.0);

        assert!(b.contains(10.0, 20.0));
        assert!(b.contains(50.0, 40.0));
        // Half-open: far edges are outside
        assert!(!b.contains(110.0, 40.0));
        assert!(!b.contains(50.0, 70.0));
    }

    #[test]
    fn test_bounds_center() {
        let b = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(b.center(), (50.0, 50.0));
    }

    #[test]
    fn test_boundary_defaults_to_element_size() {
        let b = Bounds::new(50.0, 50.0, 100.0, 100.0);
        let boundary = Boundary::centered_on(&b, None, None);

        assert_eq!(boundary.left, 50.0);
        assert_eq!(boundary.top, 50.0);
        assert_eq!(boundary.right, 150.0);
        assert_eq!(boundary.bottom, 150.0);
        assert_eq!(boundary.center(), b.center());
    }

    #[test]
    fn test_boundary_larger_than_element() {
        let b = Bounds::new(100.0, 100.0, 100.0, 100.0);
        let boundary = Boundary::centered_on(&b, Some(200.0), Some(200.0));

        // Centered: extends 50px beyond the element on each side
        assert_eq!(boundary.left, 50.0);
        assert_eq!(boundary.top, 50.0);
        assert_eq!(boundary.right, 250.0);
        assert_eq!(boundary.bottom, 250.0);
        // Same center as the element
        assert_eq!(boundary.center(), (150.0, 150.0));
    }

    #[test]
    fn test_boundary_edges_are_inclusive() {
        let b = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let boundary = Boundary::centered_on(&b, None, None);

        assert!(boundary.contains(0.0, 50.0)); // left edge
        assert!(boundary.contains(100.0, 50.0)); // right edge
        assert!(boundary.contains(50.0, 0.0)); // top edge
        assert!(boundary.contains(50.0, 100.0)); // bottom edge
        assert!(boundary.contains(0.0, 0.0)); // corner

        assert!(!boundary.contains(100.1, 50.0));
        assert!(!boundary.contains(50.0, -0.1));
    }

    #[test]
    fn test_offset_from_center() {
        let b = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let boundary = Boundary::centered_on(&b, None, None);

        assert_eq!(boundary.offset_from_center(50.0, 50.0), (0.0, 0.0));
        assert_eq!(boundary.offset_from_center(70.0, 60.0), (20.0, 10.0));
        assert_eq!(boundary.offset_from_center(30.0, 40.0), (-20.0, -10.0));
    }

    #[test]
    fn test_boundary_mixed_overrides() {
        let b = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let boundary = Boundary::centered_on(&b, Some(200.0), None);

        assert_eq!(boundary.width(), 200.0);
        assert_eq!(boundary.height(), 100.0);
        assert_eq!(boundary.center(), (50.0, 50.0));
    }
}
