//! Position of an entity in world coordinates.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// 2D position of an entity in world units.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
