//! Window scale change event and observer.
//!
//! The `=` and `-` keys trigger [`WindowScaleEvent`] with a step of `+1` or
//! `-1`. The observer adjusts [`GameConfig::scale_factor`] (clamped to
//! 1..=8); [`apply_gameconfig_changes`] then resizes the window.
//!
//! [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes

use crate::resources::gameconfig::GameConfig;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Request to grow or shrink the window by whole scale steps.
#[derive(Event, Debug, Clone, Copy)]
pub struct WindowScaleEvent {
    pub step: i32,
}

/// Observer that applies a [`WindowScaleEvent`] to the [`GameConfig`].
pub fn window_scale_observer(trigger: On<WindowScaleEvent>, mut config: ResMut<GameConfig>) {
    let previous = config.scale_factor;
    let next = config.scale_factor_after(trigger.event().step);
    // Only write on a real change so the window is not resized for nothing.
    if next != previous {
        config.scale_factor = next;
        info!("Window scale {} -> {}", previous, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_scale(scale: u32) -> World {
        let mut world = World::new();
        let mut config = GameConfig::new();
        config.set_scale_factor(scale);
        world.insert_resource(config);
        world.add_observer(window_scale_observer);
        world.flush();
        world
    }

    #[test]
    fn test_scale_steps_up_and_down() {
        let mut world = world_with_scale(3);
        world.trigger(WindowScaleEvent { step: 1 });
        assert_eq!(world.resource::<GameConfig>().scale_factor, 4);
        world.trigger(WindowScaleEvent { step: -1 });
        world.trigger(WindowScaleEvent { step: -1 });
        assert_eq!(world.resource::<GameConfig>().scale_factor, 2);
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut world = world_with_scale(8);
        world.trigger(WindowScaleEvent { step: 1 });
        assert_eq!(world.resource::<GameConfig>().scale_factor, 8);
        let mut world = world_with_scale(1);
        world.trigger(WindowScaleEvent { step: -1 });
        assert_eq!(world.resource::<GameConfig>().scale_factor, 1);
    }
}
