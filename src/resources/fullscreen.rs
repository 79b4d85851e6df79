//! Fullscreen marker.
//!
//! Present while the window is in fullscreen mode, so the window scale keys
//! know not to resize it.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the window is fullscreen.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FullScreen {}
