//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`switchfullscreen`] – toggle between fullscreen and windowed mode
//! - [`windowscale`] – grow or shrink the window by whole scale steps
pub mod switchdebug;
pub mod switchfullscreen;
pub mod windowscale;
