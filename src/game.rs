//! Game setup.
//!
//! [`setup`] runs once before the main loop: it loads the textures, the two
//! map layers and the animation table, then spawns the player.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::animation::SpriteAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::resources::animationlibrary::AnimationLibrary;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;
use crate::resources::tileatlas::TileAtlas;
use crate::resources::tilegrid::TileLayers;

pub const PLAYER_TEXTURE: &str = "player";
pub const TILES_TEXTURE: &str = "tiles";

const PLAYER_TEXTURE_PATH: &str = "./assets/textures/player1.png";
const TILES_TEXTURE_PATH: &str = "./assets/textures/tileMap.png";

const PLAYER_SHEET_FRAMES: u32 = 10;
const PLAYER_SHEET_COLUMNS: u32 = 10;
const PLAYER_CELL: f32 = 16.0;
const PLAYER_START_INTERVAL: u32 = 15;
const ATLAS_COLUMNS: u32 = 16;
const ATLAS_TILE_PX: f32 = 8.0;

/// Build the player's sprite animator: frame 0 held still, interval 15.
pub fn player_animation() -> SpriteAnimation {
    let mut anim = SpriteAnimation::new(
        PLAYER_SHEET_FRAMES,
        PLAYER_SHEET_COLUMNS,
        Vector2 {
            x: PLAYER_CELL,
            y: PLAYER_CELL,
        },
    );
    anim.set_animation(0, 0, 0);
    anim.set_speed(PLAYER_START_INTERVAL);
    anim
}

/// Spawn the player entity at the configured start position.
pub fn spawn_player(commands: &mut Commands, config: &GameConfig) -> Entity {
    commands
        .spawn((
            Player::new(config.player_speed),
            MapPosition::new(config.player_x, config.player_y),
            Sprite::new(PLAYER_TEXTURE, PLAYER_CELL, PLAYER_CELL),
            // Feet only: the lower half of the 16x16 sprite.
            BoxCollider::new(16.0, 8.0).with_offset(Vector2 { x: 0.0, y: 8.0 }),
            player_animation(),
        ))
        .id()
}

/// Load the animation table, falling back to the built-in one.
pub fn load_animation_library(config: &GameConfig) -> AnimationLibrary {
    match AnimationLibrary::load_from_file(&config.animations) {
        Ok(library) => library,
        Err(e) => {
            warn!("{}; using built-in animations", e);
            AnimationLibrary::builtin()
        }
    }
}

/// Load assets and spawn the initial entities.
pub fn setup(
    mut commands: Commands,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut textures: NonSendMut<TextureStore>,
    config: Res<GameConfig>,
) -> Result<(), String> {
    let player_tex = rl
        .load_texture(&th, PLAYER_TEXTURE_PATH)
        .map_err(|e| format!("Failed to load {}: {}", PLAYER_TEXTURE_PATH, e))?;
    textures.insert(PLAYER_TEXTURE, player_tex);

    let tiles_tex = rl
        .load_texture(&th, TILES_TEXTURE_PATH)
        .map_err(|e| format!("Failed to load {}: {}", TILES_TEXTURE_PATH, e))?;
    textures.insert(TILES_TEXTURE, tiles_tex);
    info!("Loaded {} textures", textures.len());

    let layers = TileLayers::load(&config.main_map, &config.collision_map, config.tile_size)
        .map_err(|e| format!("Failed to load map: {}", e))?;
    info!(
        "Map loaded: {} visual tiles, {} collision tiles",
        layers.visual.len(),
        layers.collision.len()
    );
    commands.insert_resource(layers);
    commands.insert_resource(TileAtlas::new(TILES_TEXTURE, ATLAS_COLUMNS, ATLAS_TILE_PX));
    commands.insert_resource(load_animation_library(&config));

    if config.debug {
        commands.insert_resource(DebugMode {});
    }

    spawn_player(&mut commands, &config);
    Ok(())
}
