//! Fullscreen toggle event and observer.
//!
//! Pressing **F11** triggers [`SwitchFullScreenEvent`], handled by
//! [`switch_fullscreen_observer`]. The [`FullScreen`] marker resource tracks
//! the current mode. Leaving fullscreen restores the windowed size from the
//! current scale factor.

use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::ffi;

/// Event triggered to toggle fullscreen mode.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchFullScreenEvent {}

/// Observer that toggles fullscreen mode when [`SwitchFullScreenEvent`] fires.
///
/// - If [`FullScreen`] exists: removes it, leaves fullscreen and restores the
///   scaled window size.
/// - Otherwise: inserts it and enters fullscreen at the monitor resolution.
pub fn switch_fullscreen_observer(
    _trigger: On<SwitchFullScreenEvent>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
    fullscreen: Option<Res<FullScreen>>,
    config: Res<GameConfig>,
) {
    if fullscreen.is_some() {
        commands.remove_resource::<FullScreen>();

        if rl.is_window_fullscreen() {
            rl.toggle_fullscreen();
            let (w, h) = config.window_size();
            rl.set_window_size(w as i32, h as i32);
            rl.restore_window();

            if rl.is_window_fullscreen() {
                error!("Failed to leave fullscreen");
            } else {
                info!("Fullscreen disabled, window {}x{}", w, h);
            }
        }
    } else {
        commands.insert_resource(FullScreen {});

        if !rl.is_window_fullscreen() {
            let monitor: i32 = unsafe { ffi::GetCurrentMonitor() };
            let monitor_width = unsafe { ffi::GetMonitorWidth(monitor) };
            let monitor_height = unsafe { ffi::GetMonitorHeight(monitor) };
            info!("Monitor dimensions: {}x{}", monitor_width, monitor_height);
            rl.set_window_size(monitor_width, monitor_height);
            rl.toggle_fullscreen();

            if rl.is_window_fullscreen() {
                info!("Fullscreen enabled");
            } else {
                error!("Failed to enter fullscreen");
            }
        }
    }
}
