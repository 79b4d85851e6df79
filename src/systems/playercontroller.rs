//! Keyboard-driven player movement and animation selection.
//!
//! Each frame at most one direction is honoured, in the fixed priority
//! up, down, left, right. With no direction held the player stands facing the
//! way it last moved. The move is speculative: the hitbox is placed at the
//! new position and the whole move is rejected if it would overlap a
//! collision tile (no sliding along walls).
//!
//! Speed is in pixels per frame, so gameplay speed follows the frame rate.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::animation::SpriteAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Facing, Player, PlayerAnim};
use crate::resources::animationlibrary::AnimationLibrary;
use crate::resources::input::InputState;
use crate::resources::tilegrid::TileLayers;
use crate::systems::collision::would_collide;

/// Displacement and animation for this frame's input.
pub fn motion_for_input(input: &InputState, current: PlayerAnim, speed: f32) -> (Vector2, PlayerAnim) {
    let walk = if input.up_held() {
        Some(Facing::Up)
    } else if input.down_held() {
        Some(Facing::Down)
    } else if input.left_held() {
        Some(Facing::Left)
    } else if input.right_held() {
        Some(Facing::Right)
    } else {
        None
    };

    match walk {
        Some(facing) => {
            let delta = match facing {
                Facing::Up => Vector2::new(0.0, -speed),
                Facing::Down => Vector2::new(0.0, speed),
                Facing::Left => Vector2::new(-speed, 0.0),
                Facing::Right => Vector2::new(speed, 0.0),
            };
            (delta, PlayerAnim::Walk(facing))
        }
        None => (Vector2::zero(), PlayerAnim::Stand(current.facing())),
    }
}

/// Move the player and switch its animation from the current input.
pub fn player_controller(
    mut query: Query<(
        &mut Player,
        &mut MapPosition,
        &BoxCollider,
        &mut SpriteAnimation,
    )>,
    input: Res<InputState>,
    layers: Res<TileLayers>,
    library: Res<AnimationLibrary>,
) {
    for (mut player, mut position, collider, mut anim) in query.iter_mut() {
        let (delta, next) = motion_for_input(&input, player.animation, player.speed);

        if next != player.animation {
            player.animation = next;
            if library.apply(next.key(), &mut anim) {
                debug!("Player animation -> {}", next);
            } else {
                warn!("No animation clip named '{}'", next);
            }
        }

        let candidate = position.pos + delta;
        if !would_collide(collider.rect_at(candidate), &layers.collision, layers.tile_size) {
            position.pos = candidate;
        }
    }
}
