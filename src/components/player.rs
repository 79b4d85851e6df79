//! Player character state.
//!
//! The player carries the name of the animation it is currently showing.
//! Names follow the `idle`, `idle_<dir>` and `walk_<dir>` scheme and are the
//! keys looked up in the
//! [`AnimationLibrary`](crate::resources::animationlibrary::AnimationLibrary).

use std::fmt;

use bevy_ecs::prelude::Component;

/// One of the four directions the player can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Animation shown by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAnim {
    /// Initial pose before any input was read.
    Idle,
    /// Standing still, looking one way.
    Stand(Facing),
    /// Walking one way.
    Walk(Facing),
}

impl PlayerAnim {
    /// Animation library key, e.g. `walk_left`.
    pub fn key(&self) -> &'static str {
        match self {
            PlayerAnim::Idle => "idle",
            PlayerAnim::Stand(Facing::Up) => "idle_up",
            PlayerAnim::Stand(Facing::Down) => "idle_down",
            PlayerAnim::Stand(Facing::Left) => "idle_left",
            PlayerAnim::Stand(Facing::Right) => "idle_right",
            PlayerAnim::Walk(Facing::Up) => "walk_up",
            PlayerAnim::Walk(Facing::Down) => "walk_down",
            PlayerAnim::Walk(Facing::Left) => "walk_left",
            PlayerAnim::Walk(Facing::Right) => "walk_right",
        }
    }

    /// Direction the player looks while showing this animation.
    ///
    /// The initial `idle` pose faces down.
    pub fn facing(&self) -> Facing {
        match self {
            PlayerAnim::Idle => Facing::Down,
            PlayerAnim::Stand(facing) | PlayerAnim::Walk(facing) => *facing,
        }
    }
}

impl fmt::Display for PlayerAnim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Marks the keyboard-driven player entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    /// Animation currently applied to the entity's sprite animator.
    pub animation: PlayerAnim,
    /// Pixels moved per tick while a direction is held.
    pub speed: f32,
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            animation: PlayerAnim::Idle,
            speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_animation_names() {
        assert_eq!(PlayerAnim::Idle.key(), "idle");
        assert_eq!(PlayerAnim::Stand(Facing::Left).key(), "idle_left");
        assert_eq!(PlayerAnim::Walk(Facing::Right).to_string(), "walk_right");
    }

    #[test]
    fn test_facing_is_remembered_from_walk_and_stand() {
        assert_eq!(PlayerAnim::Walk(Facing::Up).facing(), Facing::Up);
        assert_eq!(PlayerAnim::Stand(Facing::Left).facing(), Facing::Left);
        assert_eq!(PlayerAnim::Idle.facing(), Facing::Down);
    }

    #[test]
    fn test_key_suffix_is_facing_name() {
        for facing in [Facing::Up, Facing::Down, Facing::Left, Facing::Right] {
            assert!(PlayerAnim::Walk(facing).key().ends_with(facing.as_str()));
            assert!(PlayerAnim::Stand(facing).key().ends_with(facing.as_str()));
        }
    }
}
