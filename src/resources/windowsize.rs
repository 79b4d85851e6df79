//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which differ from the
//! virtual framebuffer resolution. Updated each frame so resizes and
//! fullscreen switches are picked up.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Where to blit a `game_width`×`game_height` framebuffer in this window.
    ///
    /// Keeps the framebuffer aspect ratio and centers it, leaving bars on top
    /// and bottom (letterbox) when the window is relatively taller, or on the
    /// sides (pillarbox) when it is wider. Sizes are truncated to whole pixels.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_aspect = game_width as f32 / game_height as f32;
        let window_aspect = self.w as f32 / self.h as f32;

        if window_aspect <= game_aspect {
            let present_h = (self.w as f32 / game_aspect) as i32;
            let bar_h = (self.h - present_h) / 2;
            Rectangle {
                x: 0.0,
                y: bar_h as f32,
                width: self.w as f32,
                height: present_h as f32,
            }
        } else {
            let present_w = (self.h as f32 * game_aspect) as i32;
            let bar_w = (self.w - present_w) / 2;
            Rectangle {
                x: bar_w as f32,
                y: 0.0,
                width: present_w as f32,
                height: self.h as f32,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple_fills_window() {
        let rect = WindowSize { w: 720, h: 480 }.calculate_letterbox(240, 160);
        assert_eq!(rect, Rectangle::new(0.0, 0.0, 720.0, 480.0));
    }

    #[test]
    fn test_wide_window_is_pillarboxed() {
        let rect = WindowSize { w: 1920, h: 1080 }.calculate_letterbox(240, 160);
        assert_eq!(rect, Rectangle::new(150.0, 0.0, 1620.0, 1080.0));
    }

    #[test]
    fn test_tall_window_is_letterboxed() {
        let rect = WindowSize { w: 480, h: 480 }.calculate_letterbox(240, 160);
        assert_eq!(rect, Rectangle::new(0.0, 80.0, 480.0, 320.0));
    }
}
