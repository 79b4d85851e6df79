//! Animation tick system.
//!
//! Advances every [`SpriteAnimation`] by one tick per frame. It runs after
//! [`player_controller`](crate::systems::playercontroller::player_controller)
//! so a freshly selected animation starts counting on the same frame.

use bevy_ecs::prelude::*;

use crate::components::animation::SpriteAnimation;

/// Count one tick on every animator.
pub fn animation(mut query: Query<&mut SpriteAnimation>) {
    for mut anim in query.iter_mut() {
        anim.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(animation);
        schedule.run(world);
    }

    #[test]
    fn test_system_updates_every_animator() {
        let mut world = World::new();
        let mut looping = SpriteAnimation::new(10, 10, Vector2 { x: 16.0, y: 16.0 });
        looping.set_animation(2, 3, 0);
        looping.set_speed(0);
        let mut pinned = looping.clone();
        pinned.set_static_frame(5, 1);

        let a = world.spawn(looping).id();
        let b = world.spawn(pinned).id();

        tick(&mut world);

        assert_eq!(world.get::<SpriteAnimation>(a).unwrap().cell(), (0, 3));
        assert_eq!(world.get::<SpriteAnimation>(b).unwrap().cell(), (1, 5));
    }
}
