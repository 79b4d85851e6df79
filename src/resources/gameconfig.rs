//! Game configuration resource.
//!
//! Settings are read from an INI file. Every key is optional; missing keys
//! keep the built-in defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 240
//! height = 160
//!
//! [window]
//! scale = 3
//! target_fps = 60
//! vsync = true
//! fullscreen = false
//!
//! [game]
//! tile_size = 8
//! player_speed = 2.0
//! player_x = 30
//! player_y = 30
//! debug = true
//!
//! [assets]
//! main_map = ./assets/maps/tileset_main.csv
//! collision_map = ./assets/maps/tileset_colision.csv
//! animations = ./assets/animations.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

const DEFAULT_RENDER_WIDTH: u32 = 240;
const DEFAULT_RENDER_HEIGHT: u32 = 160;
const DEFAULT_SCALE_FACTOR: u32 = 3;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_TILE_SIZE: f32 = 8.0;
const DEFAULT_PLAYER_SPEED: f32 = 2.0;
const DEFAULT_PLAYER_X: f32 = 30.0;
const DEFAULT_PLAYER_Y: f32 = 30.0;
const DEFAULT_DEBUG: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_MAIN_MAP: &str = "./assets/maps/tileset_main.csv";
const DEFAULT_COLLISION_MAP: &str = "./assets/maps/tileset_colision.csv";
const DEFAULT_ANIMATIONS: &str = "./assets/animations.json";

/// Smallest window scale factor.
pub const MIN_SCALE_FACTOR: u32 = 1;
/// Largest window scale factor.
pub const MAX_SCALE_FACTOR: u32 = 8;

/// Game configuration resource.
///
/// Changing it at runtime (e.g. the scale factor) is picked up by
/// [`apply_gameconfig_changes`].
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Virtual framebuffer width in pixels.
    pub render_width: u32,
    /// Virtual framebuffer height in pixels.
    pub render_height: u32,
    /// Window size as a multiple of the render size.
    pub scale_factor: u32,
    /// Target frames per second. Movement is per frame.
    pub target_fps: u32,
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Side of one map cell in virtual pixels.
    pub tile_size: f32,
    /// Pixels the player moves per frame.
    pub player_speed: f32,
    pub player_x: f32,
    pub player_y: f32,
    /// Start with the debug overlay shown.
    pub debug: bool,
    pub main_map: PathBuf,
    pub collision_map: PathBuf,
    /// Optional JSON animation table; built-ins are used when missing.
    pub animations: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            scale_factor: DEFAULT_SCALE_FACTOR,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            tile_size: DEFAULT_TILE_SIZE,
            player_speed: DEFAULT_PLAYER_SPEED,
            player_x: DEFAULT_PLAYER_X,
            player_y: DEFAULT_PLAYER_Y,
            debug: DEFAULT_DEBUG,
            main_map: PathBuf::from(DEFAULT_MAIN_MAP),
            collision_map: PathBuf::from(DEFAULT_COLLISION_MAP),
            animations: PathBuf::from(DEFAULT_ANIMATIONS),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [render] section
        if let Some(width) = positive_u32(&config, "render", "width") {
            self.render_width = width;
        }
        if let Some(height) = positive_u32(&config, "render", "height") {
            self.render_height = height;
        }

        // [window] section
        if let Some(scale) = config.getuint("window", "scale").ok().flatten() {
            self.set_scale_factor(u32::try_from(scale).unwrap_or(u32::MAX));
        }
        if let Some(fps) = positive_u32(&config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [game] section
        if let Some(tile_size) = config.getfloat("game", "tile_size").ok().flatten() {
            let tile_size = tile_size as f32;
            if tile_size.is_finite() && tile_size > 0.0 {
                self.tile_size = tile_size;
            } else {
                warn!("Ignoring [game] tile_size = {}: must be positive", tile_size);
            }
        }
        if let Some(speed) = config.getfloat("game", "player_speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(x) = config.getfloat("game", "player_x").ok().flatten() {
            self.player_x = x as f32;
        }
        if let Some(y) = config.getfloat("game", "player_y").ok().flatten() {
            self.player_y = y as f32;
        }
        if let Some(debug) = config.getbool("game", "debug").ok().flatten() {
            self.debug = debug;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "main_map") {
            self.main_map = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "collision_map") {
            self.collision_map = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "animations") {
            self.animations = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} render, scale {}, fps={}, vsync={}, fullscreen={}",
            self.render_width,
            self.render_height,
            self.scale_factor,
            self.target_fps,
            self.vsync,
            self.fullscreen
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        config.set("window", "scale", Some(self.scale_factor.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        config.set("game", "tile_size", Some(self.tile_size.to_string()));
        config.set("game", "player_speed", Some(self.player_speed.to_string()));
        config.set("game", "player_x", Some(self.player_x.to_string()));
        config.set("game", "player_y", Some(self.player_y.to_string()));
        config.set("game", "debug", Some(self.debug.to_string()));

        config.set(
            "assets",
            "main_map",
            Some(self.main_map.display().to_string()),
        );
        config.set(
            "assets",
            "collision_map",
            Some(self.collision_map.display().to_string()),
        );
        config.set(
            "assets",
            "animations",
            Some(self.animations.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set the window scale factor, clamped to
    /// [`MIN_SCALE_FACTOR`]..=[`MAX_SCALE_FACTOR`].
    pub fn set_scale_factor(&mut self, scale: u32) {
        self.scale_factor = scale.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR);
    }

    /// The scale factor `step` whole steps away, clamped to the allowed range.
    pub fn scale_factor_after(&self, step: i32) -> u32 {
        (self.scale_factor as i64 + step as i64)
            .clamp(MIN_SCALE_FACTOR as i64, MAX_SCALE_FACTOR as i64) as u32
    }

    /// Windowed size in pixels: render size times scale factor, saturating.
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.render_width.saturating_mul(self.scale_factor),
            self.render_height.saturating_mul(self.scale_factor),
        )
    }
}

/// Read `[section] key` as a `u32` greater than zero. Out-of-range values are
/// logged and ignored.
fn positive_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    let value = u32::try_from(value).ok().filter(|v| *v > 0);
    if value.is_none() {
        warn!("Ignoring [{}] {}: must be between 1 and {}", section, key, u32::MAX);
    }
    value
}
