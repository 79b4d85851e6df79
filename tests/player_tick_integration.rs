//! Player tick integration tests: input, controller, collision and animation
//! running together through a schedule.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use monomon::components::animation::SpriteAnimation;
use monomon::components::boxcollider::BoxCollider;
use monomon::components::mapposition::MapPosition;
use monomon::components::player::{Facing, Player, PlayerAnim};
use monomon::game::player_animation;
use monomon::resources::animationlibrary::AnimationLibrary;
use monomon::resources::input::InputState;
use monomon::resources::tilegrid::{TileGrid, TileLayers};
use monomon::systems::animation::animation;
use monomon::systems::playercontroller::player_controller;

fn make_world(collision_csv: &str) -> World {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    world.insert_resource(TileLayers::new(
        TileGrid::default(),
        TileGrid::parse(collision_csv),
        8.0,
    ));
    world.insert_resource(AnimationLibrary::builtin());
    world
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Player::new(2.0),
            MapPosition::new(x, y),
            BoxCollider::new(16.0, 8.0).with_offset(Vector2 { x: 0.0, y: 8.0 }),
            player_animation(),
        ))
        .id()
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_controller);
    schedule.add_systems(animation.after(player_controller));
    schedule.run(world);
}

fn position(world: &World, entity: Entity) -> Vector2 {
    world.get::<MapPosition>(entity).unwrap().pos
}

#[test]
fn holding_right_walks_then_release_stands_facing_right() {
    let mut world = make_world("");
    let player = spawn_player(&mut world, 30.0, 30.0);

    world.resource_mut::<InputState>().maindirection_right.active = true;
    tick(&mut world);

    assert_eq!(position(&world, player), Vector2 { x: 32.0, y: 30.0 });
    assert_eq!(
        world.get::<Player>(player).unwrap().animation,
        PlayerAnim::Walk(Facing::Right)
    );
    let anim = world.get::<SpriteAnimation>(player).unwrap();
    assert!(!anim.is_static());
    assert_eq!(anim.cell(), (0, 8));

    world.resource_mut::<InputState>().maindirection_right.active = false;
    tick(&mut world);

    assert_eq!(position(&world, player), Vector2 { x: 32.0, y: 30.0 });
    assert_eq!(
        world.get::<Player>(player).unwrap().animation,
        PlayerAnim::Stand(Facing::Right)
    );
    let anim = world.get::<SpriteAnimation>(player).unwrap();
    assert!(anim.is_static());
    assert_eq!(anim.cell(), (0, 8));
}

#[test]
fn walk_animation_advances_after_its_interval() {
    let mut world = make_world("");
    let player = spawn_player(&mut world, 30.0, 30.0);
    world.resource_mut::<InputState>().secondarydirection_right.active = true;

    // walk_right ticks every 10 frames: 11 updates move to the next frame.
    for _ in 0..11 {
        tick(&mut world);
    }
    assert_eq!(world.get::<SpriteAnimation>(player).unwrap().cell(), (0, 9));
    assert_eq!(position(&world, player), Vector2 { x: 52.0, y: 30.0 });
}

#[test]
fn move_into_collision_tile_is_rejected() {
    // One collision tile at column 4, row 5: x 32..40, y 40..48.
    let mut world = make_world("\n\n\n\n\n0,0,0,0,1\n");
    let player = spawn_player(&mut world, 14.0, 30.0);
    world.resource_mut::<InputState>().maindirection_right.active = true;

    // Hitbox right edge reaches x = 32: touching, still free.
    tick(&mut world);
    assert_eq!(position(&world, player), Vector2 { x: 16.0, y: 30.0 });

    // x = 34 would overlap the tile: the whole move is dropped.
    tick(&mut world);
    assert_eq!(position(&world, player), Vector2 { x: 16.0, y: 30.0 });
    assert_eq!(
        world.get::<Player>(player).unwrap().animation,
        PlayerAnim::Walk(Facing::Right)
    );
}

#[test]
fn blocked_direction_does_not_stop_other_axis_later() {
    // Wall directly to the right of the hitbox.
    let mut world = make_world("\n\n\n\n\n0,0,0,0,1\n");
    let player = spawn_player(&mut world, 16.0, 30.0);

    world.resource_mut::<InputState>().maindirection_right.active = true;
    tick(&mut world);
    assert_eq!(position(&world, player), Vector2 { x: 16.0, y: 30.0 });

    {
        let mut input = world.resource_mut::<InputState>();
        input.maindirection_right.active = false;
        input.maindirection_up.active = true;
    }
    tick(&mut world);
    assert_eq!(position(&world, player), Vector2 { x: 16.0, y: 28.0 });
    assert_eq!(
        world.get::<Player>(player).unwrap().animation,
        PlayerAnim::Walk(Facing::Up)
    );
}
