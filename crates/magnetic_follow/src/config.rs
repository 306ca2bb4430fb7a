//! Follow behavior configuration

/// Configuration for a pointer-follow attachment
///
/// Immutable for the lifetime of one attachment; changing any field means
/// tearing the attachment down and attaching fresh (see
/// [`FollowBinding`](crate::FollowBinding)).
///
/// # Example
///
/// ```rust
/// use magnetic_follow::FollowConfig;
///
/// // Repel within a 200x200 boundary, slow 1.5s return to rest
/// let config = FollowConfig::new()
///     .boundary(200.0, 200.0)
///     .return_duration_ms(1500)
///     .repel();
/// assert!(!config.follow);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FollowConfig {
    /// Boundary width; `None` defaults to the element's rendered width
    pub boundary_width: Option<f32>,
    /// Boundary height; `None` defaults to the element's rendered height
    pub boundary_height: Option<f32>,
    /// Duration of the return-to-rest animation in milliseconds
    pub return_duration_ms: u32,
    /// true = move toward the pointer, false = mirrored offset (repel)
    pub follow: bool,
}

impl FollowConfig {
    /// Create a config with the default settings
    pub fn new() -> Self {
        Self {
            boundary_width: None,
            boundary_height: None,
            return_duration_ms: 3000,
            follow: true,
        }
    }

    /// Set both boundary dimensions
    pub fn boundary(mut self, width: f32, height: f32) -> Self {
        self.boundary_width = Some(width);
        self.boundary_height = Some(height);
        self
    }

    /// Set the boundary width
    pub fn boundary_width(mut self, width: f32) -> Self {
        self.boundary_width = Some(width);
        self
    }

    /// Set the boundary height
    pub fn boundary_height(mut self, height: f32) -> Self {
        self.boundary_height = Some(height);
        self
    }

    /// Set the return-to-rest animation duration
    pub fn return_duration_ms(mut self, duration_ms: u32) -> Self {
        self.return_duration_ms = duration_ms;
        self
    }

    /// Set the displacement direction
    pub fn follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    /// Move away from the pointer instead of toward it
    pub fn repel(mut self) -> Self {
        self.follow = false;
        self
    }
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FollowConfig::default();
        assert_eq!(config.boundary_width, None);
        assert_eq!(config.boundary_height, None);
        assert_eq!(config.return_duration_ms, 3000);
        assert!(config.follow);
    }

    #[test]
    fn test_builder() {
        let config = FollowConfig::new()
            .boundary(200.0, 150.0)
            .return_duration_ms(500)
            .repel();

        assert_eq!(config.boundary_width, Some(200.0));
        assert_eq!(config.boundary_height, Some(150.0));
        assert_eq!(config.return_duration_ms, 500);
        assert!(!config.follow);
    }

    #[test]
    fn test_equality_for_change_detection() {
        let a = FollowConfig::new().boundary(200.0, 200.0);
        let b = FollowConfig::new().boundary(200.0, 200.0);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().repel());
    }
}
