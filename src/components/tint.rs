//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component holds the color modulation applied when an entity
//! is drawn. The entity's opacity rides in the color's alpha channel.

use bevy_ecs::prelude::Component;

use crate::math::Color;

/// Color modulation applied when an entity is drawn.
///
/// Defaults to opaque white, which leaves the texture unchanged.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            color: Color::rgba(r, g, b, a),
        }
    }

    /// Replace only the alpha channel, keeping the color.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.color.a = alpha;
    }

    /// Current alpha channel.
    pub fn alpha(&self) -> f32 {
        self.color.a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = Tint::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(t.color, Color::rgba(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn test_default_is_opaque_white() {
        let t = Tint::default();
        assert_eq!(t.color, Color::WHITE);
    }

    #[test]
    fn test_set_alpha_keeps_color() {
        let mut t = Tint::new(0.5, 0.6, 0.7, 1.0);
        t.set_alpha(0.25);
        assert_eq!(t.alpha(), 0.25);
        assert_eq!(t.color.r, 0.5);
        assert_eq!(t.color.g, 0.6);
        assert_eq!(t.color.b, 0.7);
    }

    #[test]
    fn test_copy_trait() {
        let t = Tint::new(0.1, 0.2, 0.3, 0.4);
        let t2 = t;
        assert_eq!(t.color, t2.color);
    }
}
