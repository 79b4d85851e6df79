//! Input system.
//!
//! [`update_input_state`] reads the keyboard from Raylib each frame, writes
//! held/pressed state into [`InputState`] and triggers the window events for
//! keys that just went down:
//! - F1 → [`SwitchDebugEvent`]
//! - F11 → [`SwitchFullScreenEvent`]
//! - `=` / `-` → [`WindowScaleEvent`]
use bevy_ecs::prelude::*;
use raylib::ffi::GamepadButton;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::events::windowscale::WindowScaleEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    };

    poll(&mut input.maindirection_up);
    poll(&mut input.maindirection_left);
    poll(&mut input.maindirection_down);
    poll(&mut input.maindirection_right);
    poll(&mut input.secondarydirection_up);
    poll(&mut input.secondarydirection_down);
    poll(&mut input.secondarydirection_left);
    poll(&mut input.secondarydirection_right);
    poll(&mut input.action_back);
    poll(&mut input.mode_debug);
    poll(&mut input.fullscreen_toggle);
    poll(&mut input.scale_up);
    poll(&mut input.scale_down);

    // The gamepad back button quits as well.
    if rl.is_gamepad_available(0)
        && rl.is_gamepad_button_down(0, GamepadButton::GAMEPAD_BUTTON_MIDDLE_LEFT)
    {
        input.action_back.active = true;
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.fullscreen_toggle.just_pressed {
        commands.trigger(SwitchFullScreenEvent {});
    }
    if input.scale_up.just_pressed {
        commands.trigger(WindowScaleEvent { step: 1 });
    }
    if input.scale_down.just_pressed {
        commands.trigger(WindowScaleEvent { step: -1 });
    }
}
