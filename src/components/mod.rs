//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – sprite-sheet animator (static cell or looping run)
//! - [`boxcollider`] – axis-aligned hitbox relative to the entity position
//! - [`mapposition`] – world-space position of an entity
//! - [`player`] – player marker with its current animation name and speed
//! - [`sprite`] – texture key and draw size

pub mod animation;
pub mod boxcollider;
pub mod mapposition;
pub mod player;
pub mod sprite;
