//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – tick every sprite animator once per frame
//! - [`collision`] – hitbox versus collision-grid overlap test
//! - [`gameconfig`] – apply config changes (window scale, fullscreen, fps)
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`playercontroller`] – move the player and pick its animation
//! - [`render`] – draw the scene into the virtual framebuffer and blit it

pub mod animation;
pub mod collision;
pub mod gameconfig;
pub mod input;
pub mod playercontroller;
pub mod render;
