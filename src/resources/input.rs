//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. WASD and the arrow keys both
//! move the player; the function keys and `=`/`-` drive the window.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    // Window and session keys
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub fullscreen_toggle: BoolState,
    pub scale_up: BoolState,
    pub scale_down: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound_to(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            secondarydirection_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            secondarydirection_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            secondarydirection_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            secondarydirection_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F1),
            fullscreen_toggle: BoolState::bound_to(KeyboardKey::KEY_F11),
            scale_up: BoolState::bound_to(KeyboardKey::KEY_EQUAL),
            scale_down: BoolState::bound_to(KeyboardKey::KEY_MINUS),
        }
    }
}

impl InputState {
    pub fn up_held(&self) -> bool {
        self.maindirection_up.active || self.secondarydirection_up.active
    }

    pub fn down_held(&self) -> bool {
        self.maindirection_down.active || self.secondarydirection_down.active
    }

    pub fn left_held(&self) -> bool {
        self.maindirection_left.active || self.secondarydirection_left.active
    }

    pub fn right_held(&self) -> bool {
        self.maindirection_right.active || self.secondarydirection_right.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_nothing_held() {
        let input = InputState::default();
        assert!(!input.up_held());
        assert!(!input.down_held());
        assert!(!input.left_held());
        assert!(!input.right_held());
        assert!(!input.action_back.active);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.maindirection_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.maindirection_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.maindirection_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.maindirection_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.secondarydirection_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F1);
        assert_eq!(input.fullscreen_toggle.key_binding, KeyboardKey::KEY_F11);
        assert_eq!(input.scale_up.key_binding, KeyboardKey::KEY_EQUAL);
        assert_eq!(input.scale_down.key_binding, KeyboardKey::KEY_MINUS);
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
    }

    #[test]
    fn test_either_binding_counts_as_held() {
        let mut input = InputState::default();
        input.secondarydirection_left.active = true;
        assert!(input.left_held());
        input.secondarydirection_left.active = false;
        input.maindirection_left.active = true;
        assert!(input.left_held());
    }
}
