//! Debug overlay toggle.
//!
//! While this resource is present the renderer outlines collision cells and
//! the player hitbox. F1 inserts or removes it through
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, debug overlays are drawn.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
