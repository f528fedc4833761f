//! Rotation of an entity.

use bevy_ecs::prelude::Component;

/// Rotation of an entity in degrees, counter-clockwise.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}
