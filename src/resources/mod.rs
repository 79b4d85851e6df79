//! ECS resources made available to systems.
//!
//! Overview
//! - `animationlibrary` – named clips used to reconfigure sprite animators
//! - `debugmode` – presence toggles the debug overlay
//! - `fullscreen` – presence marks fullscreen mode
//! - `gameconfig` – INI-backed settings (resolution, scale, speed, asset paths)
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `rendertarget` – virtual framebuffer texture (non-send)
//! - `texturestore` – loaded textures keyed by string IDs (non-send)
//! - `tileatlas` – layout of the tile atlas texture
//! - `tilegrid` – sparse CSV tile grids and the visual/collision layer pair
//! - `windowsize` – real window size and letterbox placement
pub mod animationlibrary;
pub mod debugmode;
pub mod fullscreen;
pub mod gameconfig;
pub mod input;
pub mod rendertarget;
pub mod texturestore;
pub mod tileatlas;
pub mod tilegrid;
pub mod windowsize;
