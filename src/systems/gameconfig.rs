//! Game configuration change detection system.
//!
//! Applies [`GameConfig`] to the running window whenever it is added or
//! modified: the windowed size follows the scale factor, the fullscreen flag
//! is reconciled with the [`FullScreen`] marker, and the FPS target and vsync
//! hint are refreshed.

use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

/// System that applies game configuration changes.
pub fn apply_gameconfig_changes(
    config: Res<GameConfig>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    fullscreen: Option<Res<FullScreen>>,
    mut commands: Commands,
) {
    if !(config.is_changed() || config.is_added()) {
        return;
    }

    let is_fullscreen = fullscreen.is_some();
    if config.fullscreen != is_fullscreen && config.is_added() {
        // Only the startup value drives the mode; F11 toggles it afterwards.
        commands.trigger(SwitchFullScreenEvent {});
    } else if !is_fullscreen {
        let (w, h) = config.window_size();
        if rl.get_screen_width() != w as i32 || rl.get_screen_height() != h as i32 {
            info!("Resizing window to {}x{} (scale {})", w, h, config.scale_factor);
            rl.set_window_size(w as i32, h as i32);
        }
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    rl.set_target_fps(config.target_fps);
}
