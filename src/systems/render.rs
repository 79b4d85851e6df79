//! Render system.
//!
//! Two passes per frame:
//! 1. Into the [`RenderTarget`] at the virtual resolution: clear, the visual
//!    tile layer, the debug collision cells, then every sprite with the cell
//!    picked by its [`SpriteAnimation`] (and its hitbox in debug mode).
//! 2. Into the window: clear to black and blit the render target into the
//!    letterboxed rectangle from [`WindowSize::calculate_letterbox`].
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::SpriteAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::debugmode::DebugMode;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::tileatlas::TileAtlas;
use crate::resources::tilegrid::TileLayers;
use crate::resources::windowsize::WindowSize;
use crate::systems::collision::tile_rect;

const BACKGROUND: Color = Color::new(100, 149, 237, 255);
const DEBUG_COLLISION: Color = Color::new(230, 41, 55, 128);
const DEBUG_HITBOX: Color = Color::new(0, 228, 48, 77);

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    layers: Res<TileLayers>,
    atlas: Res<TileAtlas>,
    window: Res<WindowSize>,
    debug: Option<Res<DebugMode>>,
    sprites: Query<(&MapPosition, &Sprite, &SpriteAnimation, Option<&BoxCollider>)>,
) {
    let th: &RaylibThread = &th;
    let show_debug = debug.is_some();

    {
        let mut d = rl.begin_texture_mode(th, &mut target.texture);
        d.clear_background(BACKGROUND);

        if let Some(tex) = textures.get(&atlas.tex_key) {
            for (coord, value) in layers.visual.occupied_cells() {
                d.draw_texture_pro(
                    tex,
                    atlas.source_rect(value),
                    tile_rect(coord, layers.tile_size),
                    Vector2::zero(),
                    0.0,
                    Color::WHITE,
                );
            }
        }

        if show_debug {
            for (coord, _) in layers.collision.occupied_cells() {
                d.draw_rectangle_rec(tile_rect(coord, layers.tile_size), DEBUG_COLLISION);
            }
        }

        for (position, sprite, anim, collider) in sprites.iter() {
            if let Some(tex) = textures.get(&sprite.tex_key) {
                let dest = Rectangle {
                    x: position.pos.x,
                    y: position.pos.y,
                    width: sprite.width,
                    height: sprite.height,
                };
                d.draw_texture_pro(
                    tex,
                    anim.current_cell_rect(),
                    dest,
                    Vector2::zero(),
                    0.0,
                    Color::WHITE,
                );
            }
            if show_debug {
                if let Some(collider) = collider {
                    d.draw_rectangle_rec(collider.rect_at(position.pos), DEBUG_HITBOX);
                }
            }
        }
    }

    let dest = window.calculate_letterbox(target.game_width, target.game_height);
    let mut d = rl.begin_drawing(th);
    d.clear_background(Color::BLACK);
    d.draw_texture_pro(
        target.texture.texture(),
        target.source_rect(),
        dest,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}
