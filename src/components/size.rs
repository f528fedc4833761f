//! Size of an entity in world units.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// 2D size of an entity in world units.
///
/// Dimensions never go negative: every write clamps to zero. The field is
/// private so writes go through [`Size::set`]. Defaults to 1x1.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Size {
    size: Vec2,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        let mut s = Self { size: Vec2::ZERO };
        s.set(width, height);
        s
    }

    /// Set both dimensions, clamping negatives to zero.
    pub fn set(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Set both dimensions to the same value.
    pub fn set_uniform(&mut self, side: f32) {
        self.set(side, side);
    }

    pub fn get(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}

impl Default for Size {
    /// 1x1 world unit.
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
