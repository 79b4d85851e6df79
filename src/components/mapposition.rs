//! World-space position of an entity, in virtual framebuffer pixels.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left corner of the entity's sprite.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
