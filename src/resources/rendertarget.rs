//! Virtual framebuffer for fixed-resolution rendering.
//!
//! The whole scene is drawn into a small render texture at the game's
//! virtual resolution (240×160 by default) and then blitted into the window
//! with [`WindowSize::calculate_letterbox`]. Point filtering keeps pixels
//! crisp at any scale.
//!
//! [`WindowSize::calculate_letterbox`]: crate::resources::windowsize::WindowSize::calculate_letterbox

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Render texture at the virtual resolution.
///
/// This is a NonSend resource because `RenderTexture2D` owns GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    /// Virtual width in pixels.
    pub game_width: u32,
    /// Virtual height in pixels.
    pub game_height: u32,
}

impl RenderTarget {
    /// Create the framebuffer with nearest-neighbour sampling.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle covering the whole framebuffer.
    ///
    /// The height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted render texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
